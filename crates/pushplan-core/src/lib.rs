pub mod actor;
pub mod error;
pub mod prepare;
pub mod transform;

pub use actor::PushActor;
pub use error::{CoreError, CoreResult};

pub mod prelude {
    pub use crate::actor::PushActor;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::prepare::{PreparePushPlan, PushPlanSequence, ResourceGatherer};
    pub use crate::transform::{ManifestTransformSequence, TransformManifest};
}
