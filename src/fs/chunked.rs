use std::io::{self, Read};

/// Result of a single read primitive call
#[derive(Debug)]
pub enum ChunkResult {
    /// Bytes transferred into the front of the destination, possibly zero
    Read(usize),
    EndOfFile,
    Failed(io::Error),
}

/// Single-call read primitive
/// One call may deliver fewer bytes than requested
pub trait ChunkRead {
    fn read_chunk(&mut self, dst: &mut [u8]) -> ChunkResult;
}

impl ChunkRead for std::fs::File {
    fn read_chunk(&mut self, dst: &mut [u8]) -> ChunkResult {
        loop {
            match self.read(dst) {
                Ok(0) if !dst.is_empty() => return ChunkResult::EndOfFile,
                Ok(n) => return ChunkResult::Read(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return ChunkResult::Failed(e),
            }
        }
    }
}

/// Status reported by a whole-file read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Eof,
    Error,
}

/// Why the read loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadExit {
    /// All expected bytes arrived
    Complete,
    /// End of file before the expected size was reached
    EndOfFile,
    /// A read call failed
    Failed(io::ErrorKind),
    /// A read call transferred nothing without signalling end of file
    Stalled,
}

impl ReadExit {
    pub fn status(self) -> Status {
        match self {
            ReadExit::Complete | ReadExit::Stalled => Status::Ok,
            ReadExit::EndOfFile => Status::Eof,
            ReadExit::Failed(_) => Status::Error,
        }
    }
}

/// Bytes obtained by a whole-file read and how the loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    pub bytes: Vec<u8>,
    pub exit: ReadExit,
}

impl ReadOutcome {
    pub fn status(&self) -> Status {
        self.exit.status()
    }

    /// True when every expected byte was delivered
    pub fn is_complete(&self) -> bool {
        self.exit == ReadExit::Complete
    }
}

/// Read up to `expected` bytes, issuing one read per remaining span
/// Stops on end of file, on a failed read, or on a read that makes no progress;
/// the returned buffer holds exactly the bytes obtained
pub fn read_to_size<R: ChunkRead + ?Sized>(reader: &mut R, expected: usize) -> ReadOutcome {
    let mut bytes = vec![0u8; expected];
    let mut total = 0;
    let mut exit = ReadExit::Complete;

    while total < expected {
        match reader.read_chunk(&mut bytes[total..]) {
            ChunkResult::EndOfFile => {
                exit = ReadExit::EndOfFile;
                break;
            }
            ChunkResult::Failed(e) => {
                log::warn!("read failed after {} of {} bytes: {}", total, expected, e);
                exit = ReadExit::Failed(e.kind());
                break;
            }
            ChunkResult::Read(0) => {
                log::debug!("read stalled after {} of {} bytes", total, expected);
                exit = ReadExit::Stalled;
                break;
            }
            ChunkResult::Read(n) => {
                total += n.min(expected - total);
            }
        }
    }

    bytes.truncate(total);
    ReadOutcome { bytes, exit }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out at most `chunk` bytes per call, then signals end of file
    struct Trickle<'a> {
        data: &'a [u8],
        chunk: usize,
        calls: usize,
    }

    impl ChunkRead for Trickle<'_> {
        fn read_chunk(&mut self, dst: &mut [u8]) -> ChunkResult {
            self.calls += 1;
            if self.data.is_empty() {
                return ChunkResult::EndOfFile;
            }
            let n = self.chunk.min(dst.len()).min(self.data.len());
            dst[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            ChunkResult::Read(n)
        }
    }

    #[test]
    fn test_reassembles_partial_reads() {
        let data: Vec<u8> = (0..=255).collect();
        let mut reader = Trickle { data: &data, chunk: 7, calls: 0 };

        let outcome = read_to_size(&mut reader, data.len());

        assert_eq!(outcome.bytes, data);
        assert_eq!(outcome.exit, ReadExit::Complete);
        assert_eq!(outcome.status(), Status::Ok);
        assert_eq!(reader.calls, 37, "256 bytes in chunks of 7, no extra call");
    }

    #[test]
    fn test_zero_expected_issues_no_reads() {
        let mut reader = Trickle { data: b"abc", chunk: 1, calls: 0 };
        let outcome = read_to_size(&mut reader, 0);
        assert!(outcome.bytes.is_empty());
        assert!(outcome.is_complete());
        assert_eq!(reader.calls, 0);
    }

    #[test]
    fn test_exit_statuses() {
        assert_eq!(ReadExit::Complete.status(), Status::Ok);
        assert_eq!(ReadExit::Stalled.status(), Status::Ok);
        assert_eq!(ReadExit::EndOfFile.status(), Status::Eof);
        assert_eq!(
            ReadExit::Failed(io::ErrorKind::Other).status(),
            Status::Error
        );
    }
}
