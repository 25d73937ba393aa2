/** Ordered prefix table for renderer classification.
 *
 * Earlier entries win on overlap, so the order is significant: `nvidia`
 * must be tested before `nvs` would ever be reachable for it, and `mesa`
 * sits after the hardware names so that a renderer string naming both is
 * classified by the hardware. Synonymous product lines collapse to a single
 * token. */
const RENDERER_PREFIXES: &[(&str, &str)] = &[
	("amd", "SE_GL_RENDERER_RADEON"),
	("ati", "SE_GL_RENDERER_RADEON"),
	("radeon", "SE_GL_RENDERER_RADEON"),
	("gallium", "SE_GL_RENDERER_GALLIUM"),
	("intel", "SE_GL_RENDERER_INTEL"),
	("geforce", "SE_GL_RENDERER_GEFORCE"),
	("nvidia", "SE_GL_RENDERER_GEFORCE"),
	("quadro", "SE_GL_RENDERER_QUADRO"),
	("nvs", "SE_GL_RENDERER_QUADRO"),
	("mesa", "SE_GL_RENDERER_MESA"),
];

/** Ordered prefix table for vendor classification.
 *
 * Unlike the renderer table, every entry maps to its own token. The vendor
 * field varies far less in practice than the renderer field does, so no
 * synonym collapsing applies here. */
const VENDOR_PREFIXES: &[(&str, &str)] = &[
	("ati", "SE_GL_VENDOR_ATI"),
	("intel", "SE_GL_VENDOR_INTEL"),
	("nvidia", "SE_GL_VENDOR_NVIDIA"),
	("amd", "SE_GL_VENDOR_AMD"),
	("x.org", "SE_GL_VENDOR_XORG"),
];

const RENDERER_OTHER: &str = "SE_GL_RENDERER_OTHER";
const VENDOR_OTHER: &str = "SE_GL_VENDOR_OTHER";

/* ASCII lowercasing is locale-invariant, which matters here: every prefix
 * in the tables is plain ASCII and the classification must not change with
 * the user's locale. */
fn classify(
	raw: &str,
	table: &[(&str, &'static str)],
	other: &'static str) -> &'static str {

	let raw = raw.to_ascii_lowercase();
	table.iter()
		.find(|(prefix, _)| raw.starts_with(prefix))
		.map(|(_, token)| *token)
		.unwrap_or(other)
}

/** Macro token for a free-text renderer identification string. Total, with
 * unmatched input classified as the explicit other token. */
pub fn renderer_token(raw: &str) -> &'static str {
	classify(raw, RENDERER_PREFIXES, RENDERER_OTHER)
}

/** Macro token for a free-text vendor identification string. Total, with
 * unmatched input classified as the explicit other token. */
pub fn vendor_token(raw: &str) -> &'static str {
	classify(raw, VENDOR_PREFIXES, VENDOR_OTHER)
}
