#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use rbikeshare::config::Config;
use rbikeshare::ui::Prompter;

pub fn rbs() -> Command {
    cargo_bin_cmd!("rbikeshare")
}

/// Chicago-style file: has Gender and Birth Year, with a few blank cells.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:05:00,2017-01-02 08:10:00,300,A,B,Subscriber,Male,1980.0
1,2017-01-02 08:30:00,2017-01-02 08:40:00,600,A,B,Customer,Female,1990.0
2,2017-02-03 17:00:00,2017-02-03 17:20:00,1200,C,A,Subscriber,Male,1980.0
3,2017-03-05 09:15:00,2017-03-05 09:16:00,60,B,C,Subscriber,,
4,2017-03-06 08:45:00,2017-03-06 08:49:00,240,A,C,Subscriber,Female,1975
5,2017-06-30 23:59:59,2017-07-01 00:01:29,90,C,B,Customer,Male,2001.0
6,2017-06-10 12:00:00,2017-06-10 13:00:00,3600,B,A,Subscriber,Female,1990
";

/// Washington-style file: no Gender, no Birth Year.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 08:05:00,2017-01-02 08:10:00,300,A,B,Subscriber
1,2017-01-02 08:30:00,2017-01-02 08:40:00,600,A,B,Customer
2,2017-02-07 10:00:00,2017-02-07 10:02:30,150,C,D,Subscriber
";

/// Blank duration on the second row, blank start time on the third.
pub const SPARSE_TIMES_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:05:00,300,A,B,Subscriber
2017-01-02 09:00:00,,A,B,Customer
,600,C,D,Subscriber
";

/// Most start stations blank, one end station blank, no durations at all.
pub const SPARSE_STATIONS_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:05:00,,,B,Subscriber
2017-01-02 08:10:00,,,B,Subscriber
2017-01-02 08:15:00,,A,C,Subscriber
2017-01-02 08:20:00,,A,,Customer
";

/// Create (or reset) a scratch directory inside the system temp dir.
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbikeshare", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn write_file(dir: &Path, file: &str, content: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, content).expect("write test file");
    path
}

/// `n` trips, one per hour starting 2017-01-02 00:00, stations S0..Sn.
pub fn many_rows_csv(n: usize) -> String {
    let mut csv = String::from(",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n");
    for i in 0..n {
        csv.push_str(&format!(
            "{i},2017-01-{:02} {:02}:00:00,2017-01-{:02} {:02}:30:00,1800,S{i},E{i},Subscriber\n",
            2 + i / 24,
            i % 24,
            2 + i / 24,
            i % 24
        ));
    }
    csv
}

/// Scratch dir with the two fixture cities, and a config pointing at it.
pub fn fixture_config(name: &str) -> (PathBuf, Config) {
    let dir = setup_dir(name);
    write_file(&dir, "chicago.csv", CHICAGO_CSV);
    write_file(&dir, "washington.csv", WASHINGTON_CSV);

    let cfg = Config {
        data_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    };
    (dir, cfg)
}

/// Same as [`fixture_config`], but also writes the config as YAML so the
/// binary can be pointed at it with `--config`.
pub fn fixture_config_file(name: &str) -> (PathBuf, PathBuf) {
    let (dir, _) = fixture_config(name);
    let yaml = format!(
        "data_dir: {:?}\ncities:\n  chicago: chicago.csv\n  washington: washington.csv\n  new york: new_york_city.csv\n",
        dir.to_string_lossy()
    );
    let conf = write_file(&dir, "rbikeshare.conf", &yaml);
    (dir, conf)
}

pub fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn output_of(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(prompter.into_output()).expect("utf8 output")
}
