/// Crate-wide result, every module error converts into it through `?`
pub type Result<T = ()> = anyhow::Result<T>;
