mod commands;
mod config;
