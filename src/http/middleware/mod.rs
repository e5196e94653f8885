pub mod group_config;
