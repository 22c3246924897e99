pub mod raster_sink;
