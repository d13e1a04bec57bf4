// ── OS image reference checks ──
//
// Syntactic validation of the image download URL: scheme, compressed
// qcow2 suffix, and a sha256 query parameter shaped like a digest. The
// digest is never compared against image content here.

use url::Url;

use crate::error::{Result, ValidationError};

/// Accepted image suffixes, checked against the URL path only.
pub const IMAGE_SUFFIXES: [&str; 2] = [".qcow2.gz", ".qcow2.xz"];

/// Query parameter carrying the image digest.
pub const CHECKSUM_PARAM: &str = "sha256";

const SHA256_HEX_LEN: usize = 64;

/// Validate an OS image download URL, returning the parsed form.
pub fn validate_image_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ValidationError::CannotParseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ValidationError::UnsupportedScheme {
            scheme: url.scheme().to_owned(),
            url: raw.to_owned(),
        });
    }

    if !IMAGE_SUFFIXES
        .iter()
        .any(|suffix| url.path().ends_with(suffix))
    {
        return Err(ValidationError::UnsupportedImageSuffix {
            url: raw.to_owned(),
        });
    }

    match checksum(&url) {
        Some(digest) if is_sha256_hex(&digest) => Ok(url),
        _ => Err(ValidationError::InvalidChecksumParameter {
            url: raw.to_owned(),
        }),
    }
}

/// First `sha256` query value, percent-decoded.
pub fn checksum(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == CHECKSUM_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// Last non-empty path segment, e.g. `rhcos-openstack.x86_64.qcow2.gz`.
pub fn file_name(url: &Url) -> Option<String> {
    url.path_segments()?
        .rfind(|segment| !segment.is_empty())
        .map(str::to_owned)
}

fn is_sha256_hex(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DIGEST: &str = "bc4e2a4ba4ed0c6a7ef5d1c4b0af0e8a6d3f0c3f8c0e0c5b2e3f2a1a4f8b6d97";

    fn image(path: &str, query: &str) -> String {
        format!("https://mirror.example.com/images/{path}?{query}")
    }

    #[test]
    fn accepts_gz_and_xz_images_with_digest() {
        for suffix in IMAGE_SUFFIXES {
            let raw = image(&format!("rhcos{suffix}"), &format!("sha256={DIGEST}"));
            let url = validate_image_url(&raw).unwrap();
            assert_eq!(checksum(&url).as_deref(), Some(DIGEST));
        }
        let plain_http = format!("http://172.22.0.1/rhcos.qcow2.gz?sha256={DIGEST}");
        assert!(validate_image_url(&plain_http).is_ok());
    }

    #[test]
    fn rejects_unparsable_and_relative_urls() {
        let err = validate_image_url("/images/rhcos.qcow2.gz").unwrap_err();
        assert!(matches!(err, ValidationError::CannotParseUrl { .. }));

        let err = validate_image_url("http://[::1").unwrap_err();
        assert!(matches!(err, ValidationError::CannotParseUrl { .. }));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let raw = format!("ftp://mirror.example.com/rhcos.qcow2.gz?sha256={DIGEST}");
        assert_eq!(
            validate_image_url(&raw).unwrap_err(),
            ValidationError::UnsupportedScheme {
                scheme: "ftp".into(),
                url: raw.clone(),
            }
        );
        let file = format!("file:///srv/rhcos.qcow2.gz?sha256={DIGEST}");
        assert!(
            validate_image_url(&file)
                .unwrap_err()
                .to_string()
                .contains("unsupported scheme")
        );
    }

    #[test]
    fn suffix_is_checked_on_path_not_query() {
        let raw = image("rhcos.qcow2", &format!("sha256={DIGEST}&f=.qcow2.gz"));
        assert_eq!(
            validate_image_url(&raw).unwrap_err(),
            ValidationError::UnsupportedImageSuffix { url: raw.clone() }
        );
        let iso = image("rhcos.iso", &format!("sha256={DIGEST}"));
        assert!(matches!(
            validate_image_url(&iso),
            Err(ValidationError::UnsupportedImageSuffix { .. })
        ));
    }

    #[test]
    fn checksum_must_be_64_lowercase_hex() {
        let cases = [
            "sha256=sputnik".to_owned(),
            "md5=abc".to_owned(),
            String::new(),
            format!("sha256={}", DIGEST.to_uppercase()),
            format!("sha256={}", &DIGEST[1..]),
            format!("sha256={DIGEST}0"),
        ];
        for query in cases {
            let raw = image("rhcos.qcow2.gz", &query);
            let err = validate_image_url(&raw).unwrap_err();
            assert!(
                err.to_string().contains("the sha256 parameter"),
                "query {query:?}: {err}"
            );
        }
    }

    #[test]
    fn file_name_is_last_path_segment() {
        let url = Url::parse(&image("rhcos-418.x86_64.qcow2.gz", "sha256=x")).unwrap();
        assert_eq!(file_name(&url).as_deref(), Some("rhcos-418.x86_64.qcow2.gz"));
    }
}
