pub mod case_flow;

pub use case_flow::CaseSearchFlow;
