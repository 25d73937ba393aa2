use glow::Context;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::convert::TryInto;

use crate::extensions;
use crate::gl_version::{self, GlVersionError};
use crate::os::{self, Platform};
use crate::vendor;
use crate::version::{self, VersionError};

/** Namespace prefix shared by every synthesized macro token. */
pub const MACRO_PREFIX: &str = "SE_";

/** Configuration for macro synthesis. */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProbeConfig {
	/** Host version assumed when the host reports no version at all.
	 *
	 * This is a stopgap guess and its correctness is inherently
	 * environment-specific, so it is left for the embedder to override
	 * rather than baked in. */
	pub fallback_host_version: Cow<'static, str>,
}
impl Default for ProbeConfig {
	fn default() -> Self {
		Self {
			fallback_host_version: Cow::Borrowed("1.18")
		}
	}
}

/** Raw facts about the host environment, fetched once per render-context
 * initialization and read-only thereafter. */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RawFacts {
	/** Resolved release-target version of the host application, if the
	 * host was able to report one. */
	pub host_version: Option<String>,
	/** Platform the host is running on. */
	pub platform: Platform,
	/** Raw driver string for the GL runtime version. */
	pub gl_version: String,
	/** Raw driver string for the shading language version. */
	pub glsl_version: String,
	/** Free-text vendor identification string. */
	pub vendor: String,
	/** Free-text renderer identification string. */
	pub renderer: String,
	/** Raw capability strings in driver enumeration order. */
	pub extensions: Vec<String>,
}
impl RawFacts {
	/** Collect the raw facts from a live context.
	 *
	 * This is the only part of the probe that touches the graphics
	 * context. It must run on the thread that owns the context: driver
	 * queries from any other thread silently corrupt the results rather
	 * than failing loudly, so this precondition is on the caller. */
	pub fn collect(
		gl: &Context,
		platform: Platform,
		host_version: Option<&str>) -> Self {

		let gl_version = gl_version::fetch_gl_string(gl, glow::VERSION);
		let glsl_version = gl_version::fetch_gl_string(
			gl,
			glow::SHADING_LANGUAGE_VERSION);
		let vendor = gl_version::fetch_gl_string(gl, glow::VENDOR);
		let renderer = gl_version::fetch_gl_string(gl, glow::RENDERER);
		let extensions = extensions::fetch_extensions(gl);

		debug!("Reported GL version string: {}", gl_version);
		debug!("Reported GLSL version string: {}", glsl_version);
		debug!("Reported vendor: {}", vendor);
		debug!("Reported renderer: {}", renderer);
		debug!("Discovered {} extensions", extensions.len());

		Self {
			host_version: host_version.map(|version| version.to_string()),
			platform,
			gl_version,
			glsl_version,
			vendor,
			renderer,
			extensions
		}
	}
}

/** Ordered set of macro tokens describing the host environment.
 *
 * Each token is a plain identifier suitable for literal substitution as a
 * `#define <token>` by a shader preprocessor; no values are attached.
 * Insertion order is preserved and duplicates are not removed. */
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct MacroSet {
	tokens: SmallVec<[String; 16]>,
}
impl MacroSet {
	/** Derive the macro set from already-fetched raw facts.
	 *
	 * This is a pure function: identical facts and configuration yield a
	 * byte-identical macro set. Tokens are emitted in a fixed order, with
	 * the host version first and the extension tokens last, the latter in
	 * driver enumeration order. */
	pub fn derive(
		facts: &RawFacts,
		config: &ProbeConfig) -> Result<Self, ProbeError> {

		let mut tokens = SmallVec::new();

		let host = version::host_version_code(
			facts.host_version.as_deref(),
			&config.fallback_host_version)?;
		tokens.push(format!("{}VERSION_{}", MACRO_PREFIX, host));

		tokens.push(os::os_token(facts.platform).to_string());

		let gl = gl_version::parse_gl_version(&facts.gl_version)?;
		tokens.push(format!("{}GL_{}", MACRO_PREFIX, gl));

		let glsl = gl_version::parse_gl_version(&facts.glsl_version)?;
		tokens.push(format!("{}GLSL_{}", MACRO_PREFIX, glsl));

		tokens.push(vendor::vendor_token(&facts.vendor).to_string());
		tokens.push(vendor::renderer_token(&facts.renderer).to_string());

		let count: u32 = facts.extensions.len().try_into().unwrap();
		let prefixed = extensions::prefix_extensions(
			count,
			|index| facts.extensions[index as usize].clone());
		tokens.extend(prefixed);

		/* Crate-exclusive uniform defines would be appended here, once
		 * there are any. */

		debug!("Synthesized {} environment macros", tokens.len());
		Ok(Self { tokens })
	}

	/** Probe the live context and derive the macro set in one step.
	 *
	 * Must be called on the thread that owns the context. See
	 * [`RawFacts::collect`]. */
	pub fn probe(
		gl: &Context,
		platform: Platform,
		host_version: Option<&str>,
		config: &ProbeConfig) -> Result<Self, ProbeError> {

		let facts = RawFacts::collect(gl, platform, host_version);
		Self::derive(&facts, config)
	}

	/** The tokens, in insertion order. */
	pub fn tokens(&self) -> &[String] {
		&self.tokens[..]
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<String> {
		self.tokens.iter()
	}
}
impl<'a> IntoIterator for &'a MacroSet {
	type Item = &'a String;
	type IntoIter = std::slice::Iter<'a, String>;
	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}
impl IntoIterator for MacroSet {
	type Item = String;
	type IntoIter = smallvec::IntoIter<[String; 16]>;
	fn into_iter(self) -> Self::IntoIter {
		self.tokens.into_iter()
	}
}

/** Errors that may occur while deriving the macro set. These surface to
 * whichever caller initiated environment probing; there is no local retry,
 * since the underlying driver strings will not change within a single
 * context lifetime. */
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
	#[error("could not determine the host version: {0}")]
	Version(#[from] VersionError),
	#[error("could not determine the graphics version: {0}")]
	GlVersion(#[from] GlVersionError),
}
