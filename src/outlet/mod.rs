//! 보고서 아티팩트 저장

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// 보고서 JSON을 디스크에 저장하고 저장 경로를 돌려준다.
///
/// 경로 형식: `<output_path>/<period>/cafe-<id>.json`
pub fn save_report(output_path: &Path, cafe_id: u32, period: &str, report: &Value) -> Result<PathBuf> {
    let dir = output_path.join(period);
    fs::create_dir_all(&dir).context(format!("Failed to create report directory: {:?}", dir))?;

    let file_path = dir.join(format!("cafe-{}.json", cafe_id));
    let content = serde_json::to_string_pretty(report)?;
    fs::write(&file_path, content)
        .context(format!("Failed to write report file: {:?}", file_path))?;

    Ok(file_path)
}

/// 저장된 보고서를 다시 읽는다.
pub fn load_report(output_path: &Path, cafe_id: u32, period: &str) -> Result<Value> {
    let file_path = output_path.join(period).join(format!("cafe-{}.json", cafe_id));
    let content = fs::read_to_string(&file_path)
        .context(format!("Failed to read report file: {:?}", file_path))?;
    let report = serde_json::from_str(&content).context("Failed to parse report file")?;
    Ok(report)
}
