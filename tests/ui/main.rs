mod app_component;
mod components;
mod core;
