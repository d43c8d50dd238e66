pub mod a001_venue;
