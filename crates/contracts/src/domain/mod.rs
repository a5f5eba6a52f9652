pub mod a001_society;
pub mod a002_apartment;
pub mod a003_flat;
pub mod a004_resident;
pub mod a005_meter;
pub mod a006_unit_charge;
pub mod a007_maintenance_group;
pub mod common;
