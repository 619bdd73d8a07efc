// Domain layer: motor catalog, questionnaire answers, recommendation and lead models,
// plus the catalog port. No I/O here.

pub mod catalog;
pub mod lead;
pub mod model;
pub mod ports;
