use glow::{Context, HasContext};
use std::convert::TryInto;

use crate::probe::MACRO_PREFIX;

/** Re-emit `count` driver capability strings as namespaced macro tokens.
 *
 * Lookups happen in ascending index order, starting at zero, and the result
 * preserves the driver's enumeration order faithfully. No sorting, no
 * deduplication and no filtering: consumers may key off ordinal positions
 * matching the driver's own reporting. A count of zero yields an empty
 * sequence. */
pub fn prefix_extensions<F>(count: u32, mut lookup: F) -> Vec<String>
	where F: FnMut(u32) -> String {

	(0..count)
		.map(|index| format!("{}{}", MACRO_PREFIX, lookup(index)))
		.collect()
}

/** Fetch the raw capability strings advertised by the live context, in
 * driver enumeration order.
 *
 * Must be called on the thread that owns the context. */
pub fn fetch_extensions(gl: &Context) -> Vec<String> {
	let count = unsafe { gl.get_parameter_i32(glow::NUM_EXTENSIONS) };
	let count: u32 = count.try_into().unwrap_or(0);

	(0..count)
		.map(|index| unsafe {
			gl.get_parameter_indexed_string(glow::EXTENSIONS, index)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty() {
		let tokens = prefix_extensions(0, |_| unreachable!());
		assert!(tokens.is_empty());
	}

	#[test]
	fn ascending_order() {
		let raw = [
			"GL_ARB_shader_texture_lod",
			"GL_EXT_texture_filter_anisotropic",
			"GL_ARB_texture_barrier"
		];
		let tokens = prefix_extensions(3, |index| raw[index as usize].to_string());

		assert_eq!(tokens, vec![
			"SE_GL_ARB_shader_texture_lod".to_string(),
			"SE_GL_EXT_texture_filter_anisotropic".to_string(),
			"SE_GL_ARB_texture_barrier".to_string()
		]);
	}

	#[test]
	fn duplicates_and_disorder_pass_through() {
		let raw = [
			"GL_ARB_texture_barrier",
			"GL_ARB_compute_shader",
			"GL_ARB_texture_barrier"
		];
		let tokens = prefix_extensions(3, |index| raw[index as usize].to_string());

		assert_eq!(tokens, vec![
			"SE_GL_ARB_texture_barrier".to_string(),
			"SE_GL_ARB_compute_shader".to_string(),
			"SE_GL_ARB_texture_barrier".to_string()
		]);
	}
}
