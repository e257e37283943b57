pub mod city_builder;
pub mod seven_seas;

pub use city_builder::CityBuilder;
pub use seven_seas::SevenSeas;
