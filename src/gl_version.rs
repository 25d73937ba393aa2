use glow::{Context, HasContext};
use regex::Regex;
use std::sync::OnceLock;

/** Tolerant grammar for driver version strings.
 *
 * Real-world drivers append vendor build metadata after the numeric version
 * with inconsistent separators, so everything after the leading
 * `major.minor[.bugfix]` is discarded unconditionally. The `\.*` between the
 * minor and bugfix groups accepts any number of literal dots, including
 * none. */
const VERSION_PATTERN: &str =
	r"^(?P<major>\d+)\.(?P<minor>\d+)\.*(?P<bugfix>\d*)(.*)$";

fn version_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(VERSION_PATTERN)
		.expect("the version pattern must be valid"))
}

/** Parse a raw driver version string into its numeric code.
 *
 * The same grammar serves both the GL runtime version and the shading
 * language version. The result is `major + minor + bugfix` with the
 * components used verbatim, no padding. An empty bugfix capture is used
 * verbatim too, so `"3.30"` yields `"330"`; only a structurally absent
 * group normalizes to `"0"`. An input the grammar cannot match is a hard
 * failure, since there is no safe numeric fallback for graphics capability
 * detection. */
pub fn parse_gl_version(raw: &str) -> Result<String, GlVersionError> {
	let unparseable = || GlVersionError::Unparseable {
		raw: raw.to_string()
	};

	let captures = version_pattern().captures(raw)
		.ok_or_else(unparseable)?;

	/* Group access through `name` yields `None` for an absent capture
	 * instead of failing, keeping the partial-match semantics of the
	 * grammar explicit. Major and minor are structurally guaranteed by the
	 * pattern, but an absent group is treated as unparseable all the
	 * same. */
	let major = captures.name("major")
		.ok_or_else(unparseable)?
		.as_str();
	let minor = captures.name("minor")
		.ok_or_else(unparseable)?
		.as_str();
	let bugfix = captures.name("bugfix")
		.map(|group| group.as_str())
		.unwrap_or("0");

	Ok(format!("{}{}{}", major, minor, bugfix))
}

/** Fetch a raw driver info string by its symbolic field id, such as
 * [`glow::VERSION`] or [`glow::SHADING_LANGUAGE_VERSION`].
 *
 * Must be called on the thread that owns the context. */
pub fn fetch_gl_string(gl: &Context, field: u32) -> String {
	unsafe { gl.get_parameter_string(field) }
}

/** Query the version string behind the given field id on the live context
 * and parse it with the tolerant grammar.
 *
 * Must be called on the thread that owns the context. */
pub fn gl_version_code(gl: &Context, field: u32) -> Result<String, GlVersionError> {
	let raw = fetch_gl_string(gl, field);
	debug!("Reported version string for field 0x{:04x}: {}", field, raw);

	parse_gl_version(&raw)
}

/** Errors that may occur while parsing a driver version string. */
#[derive(Debug, thiserror::Error)]
pub enum GlVersionError {
	/** This error occurs when the version string does not match the
	 * tolerant grammar at all, or when a required capture group is
	 * structurally unavailable. The offending string is carried for
	 * diagnostics. */
	#[error("could not parse a GL version from \"{raw}\"")]
	Unparseable {
		raw: String
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn with_vendor_suffix() {
		assert_eq!(
			parse_gl_version("4.6.0 NVIDIA 470.63").unwrap(),
			"460");
		assert_eq!(
			parse_gl_version("4.6 (Core Profile) Mesa 21.0.3").unwrap(),
			"46");
	}

	#[test]
	fn empty_bugfix_is_verbatim() {
		/* The shading language version is typically reported with a
		 * two-digit minor and no bugfix at all. */
		assert_eq!(parse_gl_version("3.30").unwrap(), "330");
		assert_eq!(parse_gl_version("4.60 NVIDIA").unwrap(), "460");
		assert_eq!(parse_gl_version("4.6").unwrap(), "46");
	}

	#[test]
	fn components_are_verbatim() {
		/* Unlike the host version code, no component is ever padded. */
		assert_eq!(parse_gl_version("3.3.0").unwrap(), "330");
		assert_eq!(parse_gl_version("4.5.13422").unwrap(), "4513422");
	}

	#[test]
	fn unparseable() {
		assert!(matches!(
			parse_gl_version("garbage"),
			Err(GlVersionError::Unparseable { .. })));
		assert!(matches!(
			parse_gl_version(""),
			Err(GlVersionError::Unparseable { .. })));
		/* The grammar is anchored at the start, so a textual prefix is
		 * not tolerated the way a suffix is. */
		assert!(matches!(
			parse_gl_version("OpenGL ES 3.2"),
			Err(GlVersionError::Unparseable { .. })));
	}

	#[test]
	fn diagnostics_carry_the_raw_string() {
		let error = parse_gl_version("garbage").unwrap_err();
		let GlVersionError::Unparseable { raw } = error;
		assert_eq!(raw, "garbage");
	}
}
