use crate::commands::{CmdMessage, CmdResult, StudzPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &StudzPaths) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for dir in [&paths.config, &paths.data, &paths.cache] {
        fs::create_dir_all(dir)?;
    }
    result.add_message(CmdMessage::success(format!(
        "Initialized studz data at {}",
        paths.data.display()
    )));
    Ok(result)
}
