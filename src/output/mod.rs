pub mod vehicle_movement_mappers;
