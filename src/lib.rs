pub mod batch;
pub mod catalog;
pub mod commands;
pub mod download;
pub mod http;
pub mod install;
pub mod menu;
pub mod report;
pub mod runtime;
