pub mod birth_year;
pub mod locator;
pub mod lookup;
pub mod person;
pub mod snapshot;

pub use birth_year::*;
pub use locator::*;
pub use lookup::*;
pub use person::*;
pub use snapshot::*;
