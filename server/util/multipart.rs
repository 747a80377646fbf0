/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
pub fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
        .filter(|b| !b.is_empty())
}

/// One part of a multipart/form-data body.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    /// `Some` for file inputs, even when the browser sent `filename=""`.
    pub filename: Option<String>,
    pub data: Vec<u8>,
}

/// A parsed multipart/form-data body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    /// Parses `body` using `boundary`. Parts without a `name` are skipped.
    pub fn parse(body: &[u8], boundary: &str) -> MultipartForm {
        let delimiter = format!("--{}", boundary);
        let sep = b"\r\n\r\n";
        let mut parts = Vec::new();

        for part in split_on(body, delimiter.as_bytes()) {
            let Some(sep_pos) = find_subsequence(part, sep) else {
                continue;
            };
            let headers = String::from_utf8_lossy(&part[..sep_pos]);
            let Some(name) = disposition_param(&headers, "name") else {
                continue;
            };
            let raw = &part[sep_pos + sep.len()..];
            let data = raw.strip_suffix(b"\r\n").unwrap_or(raw);
            parts.push(Part {
                name,
                filename: disposition_param(&headers, "filename"),
                data: data.to_vec(),
            });
        }
        MultipartForm { parts }
    }

    /// First file part named `field`.
    pub fn file(&self, field: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == field && p.filename.is_some())
    }

    /// First non-file part named `field`, if it is valid UTF-8.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.parts
            .iter()
            .find(|p| p.name == field && p.filename.is_none())
            .and_then(|p| std::str::from_utf8(&p.data).ok())
    }
}

/// Reads `key="value"` from a Content-Disposition header block. `name=` must
/// not match inside `filename=`, so the key has to start a parameter.
fn disposition_param(headers: &str, key: &str) -> Option<String> {
    let disposition = headers
        .lines()
        .find(|l| l.to_ascii_lowercase().starts_with("content-disposition:"))?;
    disposition.split(';').skip(1).find_map(|param| {
        let (k, v) = param.trim().split_once('=')?;
        if k.trim() == key {
            Some(v.trim().trim_matches('"').to_owned())
        } else {
            None
        }
    })
}
