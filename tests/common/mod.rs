use assert_cmd::Command;

#[allow(dead_code)]
pub const HEADER: &str = "full_date,date,day,time,mood,activities,note";

pub fn pixels_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daylio2pixels").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
