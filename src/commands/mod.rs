pub mod git_sweep;
