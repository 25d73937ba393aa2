/** Phase of world rendering the host pipeline is currently in.
 *
 * Plain data tag consumed by the render-phase state machine; carries no
 * logic of its own. */
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum RenderPhase {
	Sky,
	Terrain,
	Entities,
	TranslucentTerrain,
	TranslucentEntities,
	Clouds,
	Weather,
	Other,
	#[default]
	NotRendering
}
