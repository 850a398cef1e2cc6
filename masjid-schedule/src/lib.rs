pub mod calendar;
mod countdown;
mod highlight;
mod prayer;
mod schedule;

pub use countdown::*;
pub use highlight::*;
pub use prayer::*;
pub use schedule::*;
