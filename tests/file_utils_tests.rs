use scene_harness::fs::{self, File, ReadExit, Status};
use scene_harness::FileError;

#[cfg(test)]
mod byte_io_tests {
    use super::*;

    #[test]
    fn test_bytes_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let buffers: Vec<Vec<u8>> = vec![
            vec![],
            vec![0],
            (0..=255).collect(),
            (0..200_000u32).map(|i| (i * 31 % 251) as u8).collect(),
        ];

        for (i, buffer) in buffers.iter().enumerate() {
            let file = File::new(dir.path().join(format!("data_{}.bin", i)));
            fs::write_all_bytes(&file, buffer).unwrap();

            let outcome = fs::read_all_bytes(&file).unwrap();
            assert_eq!(&outcome.bytes, buffer, "buffer {} should survive a round trip", i);
            assert_eq!(outcome.status(), Status::Ok);
            assert_eq!(outcome.exit, ReadExit::Complete);
        }
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("data.bin"));

        fs::write_all_bytes(&file, &[1u8; 64]).unwrap();
        fs::write_all_bytes(&file, &[2u8; 3]).unwrap();

        assert_eq!(fs::read_all_bytes(&file).unwrap().bytes, vec![2u8; 3]);
        assert_eq!(file.size_in_bytes().unwrap(), 3);
    }

    #[test]
    fn test_read_missing_file_fails_on_size_query() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("missing.bin"));

        let err = fs::read_all_bytes(&file).unwrap_err();
        assert!(matches!(err, FileError::SizeQuery { .. }));
    }

    #[test]
    fn test_read_directory_fails_on_size_query() {
        let dir = tempfile::tempdir().unwrap();
        let err = fs::read_all_bytes(&File::new(dir.path())).unwrap_err();
        assert!(matches!(err, FileError::SizeQuery { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("no_such_dir").join("data.bin"));

        let err = fs::write_all_bytes(&file, b"content").unwrap_err();
        assert!(matches!(err, FileError::Open { .. }));
        assert!(!file.exists());
    }
}

#[cfg(test)]
mod text_io_tests {
    use super::*;

    #[test]
    fn test_text_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("notes.txt"));
        let text = "first line\nzweite Zeile äöü\n";

        fs::write_all_text(&file, text).unwrap();

        assert_eq!(fs::read_all_text(&file), text);
    }

    #[test]
    fn test_read_missing_text_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("missing.txt"));

        assert_eq!(fs::read_all_text(&file), "");
        assert!(!file.exists(), "callers tell missing files apart via exists()");
    }

    #[test]
    fn test_overwrite_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("notes.txt"));

        fs::write_all_text(&file, "a much longer first version").unwrap();
        fs::write_all_text(&file, "short").unwrap();

        assert_eq!(fs::read_all_text(&file), "short");
    }
}

#[cfg(test)]
mod directory_tests {
    use super::*;

    #[test]
    fn test_create_directories_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = File::new(dir.path().join("a").join("b").join("c"));

        fs::create_directories(&nested).unwrap();
        fs::create_directories(&nested).unwrap();

        assert!(nested.is_directory());
    }

    #[test]
    fn test_create_directories_over_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::new(dir.path().join("plain"));
        fs::write_all_text(&file, "x").unwrap();

        assert!(fs::create_directories(&file).is_err());
        assert!(fs::create_directories(&file.join("child")).is_err());
    }

    #[test]
    fn test_remove_directory_with_contents() {
        let dir = tempfile::tempdir().unwrap();
        let root = File::new(dir.path().join("root"));
        fs::create_directories(&root.join("sub")).unwrap();
        fs::write_all_text(&root.join("sub").join("file.txt"), "content").unwrap();

        fs::remove_directory(&root).unwrap();

        assert!(!root.exists());
    }

    #[test]
    fn test_remove_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = File::new(dir.path().join("missing"));

        let err = fs::remove_directory(&missing).unwrap_err();
        assert!(matches!(err, FileError::RemoveDirectory { .. }));
    }
}
