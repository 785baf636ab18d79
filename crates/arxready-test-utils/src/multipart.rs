//! Hand-built `multipart/form-data` bodies for router tests.

const BOUNDARY: &str = "----arxready-test-boundary-7MA4YWxkTrZu0gW";

#[derive(Debug, Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file part. `content_type` of `None` omits the part header.
    pub fn file(mut self, field: &str, file_name: &str, content_type: Option<&str>, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n")
                .as_bytes(),
        );
        if let Some(ct) = content_type {
            self.body.extend_from_slice(format!("Content-Type: {ct}\r\n").as_bytes());
        }
        self.body.extend_from_slice(b"\r\n");
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// What a browser sends for a file input left empty.
    pub fn empty_file(self, field: &str) -> Self {
        self.file(field, "", Some("application/octet-stream"), b"")
    }

    /// Append a plain text field.
    pub fn text(mut self, field: &str, value: &str) -> Self {
        self.body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{field}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn build(mut self) -> Vec<u8> {
        self.body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}
