mod event_loop;
mod keys;

pub use event_loop::run_app;
