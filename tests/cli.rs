// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn mandel() -> Command {
    Command::cargo_bin("mandel").unwrap()
}

#[test]
fn help_prints_usage_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.bmp");
    mandel()
        .args(&["-h", "-o"])
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Number of threads"))
        .stdout(predicate::str::contains("Some examples are"));
    assert!(!out.exists());
}

#[test]
fn renders_a_bitmap() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("small.bmp");
    mandel()
        .args(&["-W", "16", "-H", "12", "-m", "50", "-n", "3", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("mandel: x=0.000000 y=0.000000 scale=4.000000 threads=3 max=50"))
        .stdout(predicate::str::contains("microseconds"));

    let img = image::open(&out).unwrap().to_rgb();
    assert_eq!((img.width(), img.height()), (16, 12));
    // The centre of the default window is the origin, which never escapes.
    assert_eq!(img.get_pixel(8, 6).0, [255, 255, 255]);
}

#[test]
fn negative_centers_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("neg.bmp");
    mandel()
        .args(&["-x", "-0.5", "-y", "-.5", "-s", "0.2", "-W", "8", "-H", "8", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("x=-0.500000 y=-0.500000 scale=0.200000"));
    assert!(out.exists());
}

#[test]
fn truncated_partition_leaves_blue_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bands.bmp");
    mandel()
        .args(&["-W", "4", "-H", "10", "-n", "3", "-m", "20"])
        .args(&["--partition", "truncate", "-o"])
        .arg(&out)
        .assert()
        .success();

    let img = image::open(&out).unwrap().to_rgb();
    for x in 0..4 {
        assert_eq!(img.get_pixel(x, 9).0, [0, 0, 255]);
        assert_ne!(img.get_pixel(x, 8).0, [0, 0, 255]);
    }
}

#[test]
fn absorbed_partition_fills_every_row() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bands.bmp");
    mandel()
        .args(&["-W", "4", "-H", "10", "-n", "3", "-m", "20", "-o"])
        .arg(&out)
        .assert()
        .success();

    let img = image::open(&out).unwrap().to_rgb();
    assert!(img.pixels().all(|p| p.0 != [0, 0, 255]));
}

#[test]
fn unwritable_output_fails_after_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no-such-dir").join("mandel.bmp");
    mandel()
        .args(&["-W", "8", "-H", "8", "-n", "2", "-o"])
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("microseconds"))
        .stderr(predicate::str::contains("mandel: couldn't write to"))
        .stderr(predicate::str::contains("mandel.bmp"));
}

#[test]
fn zero_threads_are_rejected() {
    mandel()
        .args(&["-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Thread count must be at least 1"));
}

#[test]
fn non_positive_scale_is_rejected() {
    mandel()
        .args(&["-s", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scale must be a positive number"));
}

#[test]
fn output_is_a_bitmap_whatever_its_name() {
    let dir = tempfile::tempdir().unwrap();
    for name in &["picture", "picture.png"] {
        let out = dir.path().join(name);
        mandel()
            .args(&["-W", "8", "-H", "6", "-o"])
            .arg(&out)
            .assert()
            .success();

        let bytes = std::fs::read(&out).unwrap();
        let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::BMP)
            .unwrap()
            .to_rgb();
        assert_eq!((img.width(), img.height()), (8, 6), "{}", name);
    }
}

#[test]
fn oversized_images_are_rejected_cleanly() {
    mandel()
        .args(&["-W", "4294967295", "-H", "4294967295"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("too large to hold in memory"));
}

#[test]
fn render_summary_is_logged_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("quiet.bmp");
    mandel()
        .args(&["-W", "4", "-H", "4", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("render complete"))
        .stderr(predicate::str::contains("band started").not());
}

#[test]
fn verbose_logs_each_band() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("loud.bmp");
    mandel()
        .args(&["-v", "-W", "4", "-H", "4", "-n", "2", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("band started"))
        .stderr(predicate::str::contains("band finished"));
}
