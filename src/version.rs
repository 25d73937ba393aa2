/** Normalizes the host application's dotted version string into the
 * fixed-width numeric code shader packs expect.
 *
 * The code is `major + minor + bugfix`, with the minor and bugfix components
 * left-zero-padded to two digits and a missing bugfix standing in as `00`.
 * The major component is taken verbatim. `"1.18"` becomes `"11800"` and
 * `"1.7.10"` becomes `"10710"`. */
pub fn normalize(version: &str) -> Result<String, VersionError> {
	let mut components = version.split('.').collect::<Vec<_>>();

	/* Trailing empty components are dropped, so that a stray trailing dot
	 * behaves the same as no dot at all. `"1."` is still malformed. */
	while components.last() == Some(&"") {
		let _ = components.pop();
	}

	if components.len() < 2 {
		return Err(VersionError::Malformed {
			version: version.to_string()
		})
	}

	let major = components[0];
	let minor = components[1];
	let bugfix = components.get(2).copied().unwrap_or("00");

	let mut code = String::with_capacity(major.len() + 4);
	code.push_str(major);
	if minor.len() == 1 {
		code.push('0');
	}
	code.push_str(minor);
	if bugfix.len() == 1 {
		code.push('0');
	}
	code.push_str(bugfix);

	Ok(code)
}

/** Version code for the running host application.
 *
 * When the host could not report a version at all this falls back to the
 * given baseline version rather than failing, since shader compilation must
 * still proceed with a best-effort guess. The fallback is logged as a
 * recoverable anomaly. A version that was reported but is malformed still
 * fails. */
pub fn host_version_code(
	reported: Option<&str>,
	fallback: &str) -> Result<String, VersionError> {

	match reported {
		Some(version) => normalize(version),
		None => {
			warn!("could not determine the host version, assuming {}",
				fallback);
			normalize(fallback)
		}
	}
}

/** Errors that may occur while normalizing a host version string. */
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
	/** This error occurs when a dotted version string has fewer than the
	 * two components required to derive a version code. */
	#[error("could not parse host version \"{version}\"")]
	Malformed {
		version: String
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn two_components() {
		assert_eq!(normalize("1.18").unwrap(), "11800");
		assert_eq!(normalize("1.9").unwrap(), "10900");
	}

	#[test]
	fn three_components() {
		assert_eq!(normalize("1.7.10").unwrap(), "10710");
		assert_eq!(normalize("1.16.5").unwrap(), "11605");
		assert_eq!(normalize("1.18.2").unwrap(), "11802");
	}

	#[test]
	fn wide_components_are_not_padded() {
		assert_eq!(normalize("2.40.11").unwrap(), "24011");
	}

	#[test]
	fn malformed() {
		assert!(matches!(
			normalize("1"),
			Err(VersionError::Malformed { .. })));
		assert!(matches!(
			normalize("118"),
			Err(VersionError::Malformed { .. })));
		assert!(matches!(
			normalize("1."),
			Err(VersionError::Malformed { .. })));
	}

	#[test]
	fn fallback() {
		assert_eq!(
			host_version_code(None, "1.18").unwrap(),
			"11800");
		assert_eq!(
			host_version_code(Some("1.17.1"), "1.18").unwrap(),
			"11701");
		assert!(host_version_code(Some("broken"), "1.18").is_err());
	}
}
