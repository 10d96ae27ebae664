#![allow(dead_code)]

use std::cell::Cell;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use sentiment140_prep::core::Result;
use sentiment140_prep::loaders::DatasetSource;
use zip::write::SimpleFileOptions;

pub const RAW_CSV_NAME: &str = "training.1600000.processed.noemoticon.csv";

/// In-memory source that counts how often it is asked for the archive.
pub struct CountingSource {
    body: Vec<u8>,
    calls: Cell<usize>,
}

impl CountingSource {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DatasetSource for CountingSource {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.body.clone())
    }
}

/// One raw Sentiment140 line: six quoted fields.
pub fn raw_line(sentiment: i64, id: u64, text: &str) -> String {
    format!("\"{sentiment}\",\"{id}\",\"Mon Apr 06 22:19:45 PDT 2009\",\"NO_QUERY\",\"user{id}\",\"{text}\"\n")
}

/// Raw CSV with `n` rows alternating between the negative and positive codes.
pub fn raw_csv(n: usize) -> String {
    (0..n)
        .map(|i| raw_line(if i % 2 == 0 { 0 } else { 4 }, i as u64, &format!("tweet number {i}")))
        .collect()
}

pub fn zip_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buf));
        for (name, content) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap();
    }
    buf
}

/// Archive shaped like the Sentiment140 download.
pub fn sentiment140_archive(csv: &str) -> Vec<u8> {
    zip_archive(&[
        (RAW_CSV_NAME, csv.as_bytes()),
        ("testdata.manual.2009.06.14.csv", raw_line(4, 1, "test row").as_bytes()),
    ])
}

/// Serves a single HTTP response on localhost and returns its URL.
pub fn serve_once(status_line: &str, body: Vec<u8>) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status_line = status_line.to_string();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
        }
        let header = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nContent-Type: application/zip\r\nConnection: close\r\n\r\n",
            body.len()
        );
        stream.write_all(header.as_bytes()).unwrap();
        stream.write_all(&body).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{addr}/trainingandtestdata.zip"), handle)
}
