mod config;
mod loading;
mod navigation;
