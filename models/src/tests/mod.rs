mod fakes;
mod pagination;
mod params;
mod types;
