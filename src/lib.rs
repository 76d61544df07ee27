pub mod arc;
pub mod dial;
pub mod domain;
pub mod drag;
pub mod geometry;
pub mod mapper;
pub mod pointer;
pub mod settings;

pub use arc::{ArcSpec, PathCommand, PathDescription, build_arc};
pub use dial::{ElevationControl, HeadingControl};
pub use domain::{AngularDomain, DomainError};
pub use geometry::{Convention, Point, Rect};
pub use pointer::{Document, HitRegion, PointerEvent, Propagation};
pub use settings::{DialKind, ElevationSettings, HeadingSettings};
