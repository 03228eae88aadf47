pub mod f64_ext;
