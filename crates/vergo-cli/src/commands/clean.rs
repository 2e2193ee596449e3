//! `clean` task handler.

use std::path::Path;

use miette::Result;
use vergo_ops::ops_clean::{self, CleanResult};

pub fn exec(root_dir: &Path) -> Result<()> {
    match ops_clean::clean(root_dir)? {
        CleanResult::Cleaned => println!("Cleaned build directory"),
        CleanResult::NothingToClean => println!("Nothing to clean"),
    }
    Ok(())
}
