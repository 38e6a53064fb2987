mod common;
mod dataset;
mod service;
