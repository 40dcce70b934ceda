pub mod registry;

pub use registry::AppointmentRegistryService;
