#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dt() -> Command {
    cargo_bin_cmd!("daytrip")
}

pub const HEADER: &str =
    "name,category,mood,duration_min,who_with,description,address,url,image_path,lat,lon\n";

/// Write a CSV dataset into the system temp dir and return its path
pub fn write_dataset(name: &str, body: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_daytrip.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    fs::write(&p, body).expect("write dataset");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small catalog used by many tests:
/// five のんびり spots (one without duration and coordinates) plus two
/// spots with other moods.
pub fn sample_dataset(name: &str) -> String {
    let mut body = String::from(HEADER);
    body.push_str(concat!(
        "海王丸パーク,公園,\"のんびり,景色\",120,\"家族と,友人と\",帆船と芝生広場,射水市海王町8,https://www.kaiwomaru.jp/,,36.7784,137.0988\n",
        "内川遊歩道,散策路,\"のんびり,散策\",90,\"一人で,カップルで\",日本のベニス,射水市八幡町,,,36.7780,137.0730\n",
        "太閤山ランド,公園,\"のんびり,アクティブ\",300,家族と,一日遊べる県民公園,射水市黒河,,,36.7260,137.0560\n",
        "下条川千本桜,自然,\"のんびり,景色\",,カップルで,川沿いの桜並木,射水市戸破,,,,\n",
        "薬勝寺池公園,公園,のんびり,60,\"一人で,家族と\",池を囲む散歩道,射水市中太閤山,,,36.7230,137.0640\n",
        "竹内源造記念館,博物館,\"歴史,文化\",60,一人で,鏝絵の記念館,射水市戸破,,,36.7270,137.0920\n",
        "新湊きっときと市場,市場,\"美味しいもの,買い物\",60,\"家族と,友人と\",海の幸の市場,射水市海王町1,,,36.7756,137.0833\n",
    ));
    write_dataset(name, &body)
}
