mod builder_input;
mod scenario;
