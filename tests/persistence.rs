//! Save/restore round trips through real files

use figures::storage::{self, restore_into};
use figures::*;
use std::env;
use std::fs;
use std::path::PathBuf;

/// A file under the temp directory, removed when dropped
struct TempFile(PathBuf);

impl TempFile {
    fn new(name: &str) -> Self {
        TempFile(env::temp_dir().join(format!("figures-it-{}-{}.txt", std::process::id(), name)))
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn mixed_shapes(ids: &mut IdGenerator) -> Vec<Shape> {
    let mut rect = Rect::new();
    rect.set(
        ids,
        Point::new(1.0, 1.0),
        Point::new(1.0, 5.0),
        Point::new(5.0, 5.0),
        Point::new(5.0, 1.0),
    );

    let mut circle = Circle::new();
    circle.set(ids, Point::new(-2.5, 0.1), 0.3);

    let mut triangle = Triangle::new();
    triangle.set(ids, Point::new(1.0, 1.0), Point::new(3.0, 3.0), Point::new(4.0, 2.0));

    let polyline = Polyline::with_points(
        ids,
        vec![Point::new(0.1, 0.2), Point::new(-7.0, 1e-3), Point::new(12.5, 3.0)],
    );

    vec![rect.into(), circle.into(), triangle.into(), polyline.into()]
}

#[test]
fn test_round_trip_keeps_ids_centers_and_points() {
    let file = TempFile::new("round-trip");
    let mut ids = IdGenerator::new();
    let shapes = mixed_shapes(&mut ids);

    let written = save_all(&shapes, &file.0).expect("save failed");
    assert_eq!(written, shapes.len());

    let restored = restore_all(&file.0);
    assert_eq!(restored.len(), shapes.len());
    for (before, after) in shapes.iter().zip(&restored) {
        assert_eq!(before.kind(), after.kind());
        assert_eq!(before.id(), after.id());
        assert_eq!(before.center(), after.center());
        assert_eq!(before.points(), after.points());
    }
    assert_eq!(restored, shapes);
}

#[test]
fn test_saved_file_layout() {
    let file = TempFile::new("layout");
    let mut ids = IdGenerator::new();
    save_all(&mixed_shapes(&mut ids), &file.0).unwrap();

    let text = fs::read_to_string(&file.0).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "rectangle");
    assert_eq!(lines[1], "1,3,3,1,1,1,5,5,5,5,1");
    assert_eq!(lines[2], "circle");
    assert_eq!(lines[3], "2,-2.5,0.1,0.3");
    assert_eq!(lines[4], "triangle");
    assert!(lines[5].starts_with("3,2.66"));
    assert!(lines[5].ends_with(",1,1,3,3,4,2,0,0"));
    assert_eq!(lines[6], "polyline");
    assert!(lines[7].ends_with(",0.1,0.2,-7,0.001,12.5,3"));
}

#[test]
fn test_save_overwrites_existing_content() {
    let file = TempFile::new("overwrite");
    fs::write(&file.0, "stale\nstale\nstale\n").unwrap();

    let mut ids = IdGenerator::new();
    let mut circle = Circle::new();
    circle.set(&mut ids, Point::new(1.0, 1.0), 5.0);
    save_all(&[circle.into()], &file.0).unwrap();

    assert_eq!(fs::read_to_string(&file.0).unwrap(), "circle\n1,1,1,5\n");
}

#[test]
fn test_unknown_tag_then_circle() {
    let file = TempFile::new("unknown-tag");
    fs::write(&file.0, "hexagon\ncircle\n9,1,1,5\n").unwrap();

    let restored = restore_all(&file.0);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].kind(), ShapeKind::Circle);
    assert_eq!(restored[0].id(), ShapeId(9));
    assert_eq!(restored[0].center(), Some(Point::new(1.0, 1.0)));
}

#[test]
fn test_missing_file_restores_nothing() {
    let file = TempFile::new("does-not-exist");
    let _ = fs::remove_file(&file.0);
    assert!(restore_all(&file.0).is_empty());
}

#[test]
fn test_save_to_unopenable_path() {
    let dir = env::temp_dir().join(format!("figures-it-{}-no-such-dir", std::process::id()));
    let path = dir.join("figures.txt");
    let mut ids = IdGenerator::new();

    let result = save_all(&mixed_shapes(&mut ids), &path);
    assert!(matches!(result, Err(StorageError::Open { .. })));
    assert!(!path.exists());
}

#[test]
fn test_restore_into_moves_generator_past_restored_ids() {
    let file = TempFile::new("restore-into");
    fs::write(&file.0, "circle\n40,0,0,1\npolyline\n7,0.5,0.5,0,0,1,1\n").unwrap();

    let mut ids = IdGenerator::new();
    let restored = restore_into(&file.0, &mut ids);
    assert_eq!(restored.len(), 2);
    assert_eq!(ids.next_id(), ShapeId(41));
}

#[test]
fn test_crlf_file() {
    let file = TempFile::new("crlf");
    fs::write(&file.0, "triangle\r\n1,2,2,1,1,3,3,2,2,0,0\r\n").unwrap();

    let restored = restore_all(&file.0);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].points().len(), 3);
}

#[test]
fn test_default_path() {
    assert_eq!(storage::DEFAULT_PATH, "figures.txt");
}

#[test]
fn test_restore_into_largest_id() {
    let file = TempFile::new("largest-id");
    fs::write(&file.0, "circle\n18446744073709551615,0,0,1\n").unwrap();

    let mut ids = IdGenerator::new();
    let restored = restore_into(&file.0, &mut ids);
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].id(), ShapeId(u64::MAX));
    assert_eq!(ids.next_id(), ShapeId(u64::MAX));
}

#[test]
fn test_non_utf8_line_does_not_end_restore() {
    let file = TempFile::new("non-utf8");
    fs::write(&file.0, b"circle\n1,0,0,1\n\xff\xfe\ncircle\n2,0,0,1\n").unwrap();

    let restored = restore_all(&file.0);
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[1].id(), ShapeId(2));
}
