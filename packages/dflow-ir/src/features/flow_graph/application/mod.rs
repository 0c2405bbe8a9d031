mod build_cfg;

pub use build_cfg::BuildCfgUseCase;
