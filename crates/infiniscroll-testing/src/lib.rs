//! Testing utilities and harness for infiniscroll

pub mod cells;
pub mod robot;
pub mod robot_assertions;

pub use cells::*;
pub use robot::*;
pub use robot_assertions::*;

pub mod prelude {
    pub use crate::cells::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::robot_assertions::*;
}
