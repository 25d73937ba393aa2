use std::borrow::Cow;

/** A companion-plugin build admitted by the compatibility check. */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AllowedPluginBuild {
	build: Cow<'static, str>,
}
impl AllowedPluginBuild {
	/** An allow-list entry matching exactly one build-identifier string. */
	pub const fn exact(build: &'static str) -> Self {
		Self { build: Cow::Borrowed(build) }
	}

	/** Whether the given build identifier matches this entry. */
	pub fn matches(&self, build: &str) -> bool {
		self.build == build
	}
}

/** Builds of the companion rendering-optimization plugin known to work with
 * this crate's shader environment. */
pub const ALLOWED_PLUGIN_BUILDS: &[AllowedPluginBuild] = &[
	AllowedPluginBuild::exact("0.4.0-alpha5+build.816"),
	AllowedPluginBuild::exact("0.4.0-alpha5+rev.63aafcd"),
	AllowedPluginBuild::exact("0.4.0-alpha5+rev.d3a2a28"),
];

/** Whether the given plugin build identifier is compatible.
 *
 * Pure set membership over exact string matches. No semantic version
 * comparison happens here: a build one patch away from an allowed one is
 * still rejected. */
pub fn is_allowed_build(build: &str) -> bool {
	is_allowed_in(build, ALLOWED_PLUGIN_BUILDS)
}

/** Membership test against a caller-supplied allow-list, for embedders that
 * maintain their own. */
pub fn is_allowed_in(build: &str, allowed: &[AllowedPluginBuild]) -> bool {
	allowed.iter().any(|entry| entry.matches(build))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exact_membership() {
		assert!(is_allowed_build("0.4.0-alpha5+build.816"));
		assert!(is_allowed_build("0.4.0-alpha5+rev.63aafcd"));
		assert!(is_allowed_build("0.4.0-alpha5+rev.d3a2a28"));
	}

	#[test]
	fn near_misses_are_rejected() {
		assert!(!is_allowed_build("0.4.0-alpha5"));
		assert!(!is_allowed_build("0.4.0-alpha5+build.817"));
		assert!(!is_allowed_build("0.4.0-alpha6+build.816"));
		assert!(!is_allowed_build(""));
	}

	#[test]
	fn custom_list() {
		let allowed = [AllowedPluginBuild::exact("1.0.0+build.1")];
		assert!(is_allowed_in("1.0.0+build.1", &allowed));
		assert!(!is_allowed_in("0.4.0-alpha5+build.816", &allowed));
	}
}
