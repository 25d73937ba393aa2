/** Platform the host application is running on, as reported by the host. */
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Platform {
	MacOs,
	Linux,
	Windows,
	Solaris,
	Unknown
}

/** Macro token for the given platform.
 *
 * Total over every platform value. Solaris deliberately maps to the generic
 * unknown token, matching the set of operating system macros shader packs
 * were written against. */
pub fn os_token(platform: Platform) -> &'static str {
	match platform {
		Platform::MacOs => "SE_OS_MAC",
		Platform::Linux => "SE_OS_LINUX",
		Platform::Windows => "SE_OS_WINDOWS",
		Platform::Solaris | Platform::Unknown => "SE_OS_UNKNOWN"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tokens() {
		assert_eq!(os_token(Platform::MacOs), "SE_OS_MAC");
		assert_eq!(os_token(Platform::Linux), "SE_OS_LINUX");
		assert_eq!(os_token(Platform::Windows), "SE_OS_WINDOWS");
		assert_eq!(os_token(Platform::Unknown), "SE_OS_UNKNOWN");
	}

	#[test]
	fn solaris_is_unknown() {
		assert_eq!(os_token(Platform::Solaris), "SE_OS_UNKNOWN");
	}
}
