//! Baseline and Post-IA record shapes, one variant per indicator type.

pub mod baseline;
pub mod entries;
pub mod post_ia;
pub mod registry;

pub use baseline::{
    AnalyticalInputs, BaselineRecord, DecisionInputs, MarginBaseline, OtherBaseline,
    ProductivityBaseline, RelatedCostsBaseline, RevenueBaseline, RiskBaseline,
    SatisfactionBaseline, SpeedInputs,
};
pub use entries::{Keyed, Person, PostIaTool, QualitativeEntry, Tool};
pub use post_ia::{
    AnalyticalPostIa, DecisionQualityPostIa, MarginPostIa, OtherPostIa, PostIaRecord,
    ProductivityPostIa, RelatedCostsPostIa, RevenuePostIa, RiskPostIa, SatisfactionPostIa,
    SpeedPostIa,
};
pub use registry::{VariantSpec, VisibilityFlag};
