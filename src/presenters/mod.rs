pub mod file;
pub mod raster;
