use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub const CAPDIST_SAMPLE: &str = "\
numa,ida,numb,idb,kmdist,midist
2,USA,20,CAN,735,457
20,CAN,2,USA,735,457
2,USA,70,MEX,2991,1859
70,MEX,2,USA,2991,1859
20,CAN,70,MEX,3604,2240
200,UKG,220,FRN,342,213
220,FRN,255,GMY,879,546
200,UKG,255,GMY,932,579
";

/// roadtrip command isolated from any user configuration
pub fn roadtrip(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env("ROADTRIP_CONFIG_DIR", config_dir)
        .env_remove("ROADTRIP_DATA")
        .env_remove("ROADTRIP_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("ROADTRIP_LOG");
    cmd
}

#[allow(dead_code)]
pub fn write_dataset(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("capdist.csv");
    fs::write(&path, content).expect("write dataset");
    path
}
