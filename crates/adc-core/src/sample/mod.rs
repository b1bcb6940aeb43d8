pub mod quantizer;

pub use quantizer::float_to_digital_u8;
