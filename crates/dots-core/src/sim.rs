use crate::buffers::RenderBuffers;
use crate::camera::{RayCaster, Viewport};
use crate::config::{ConfigError, SphereConfig};
use crate::field::ParticleField;
use crate::interaction::{CursorPath, Interaction, InteractionReport};
use crate::morph::{self, MorphControl};
use crate::pointer::{CursorSample, PointerResolver, ResolverConfig};
use glam::Quat;

pub struct FrameInput<'a, C: RayCaster + ?Sized> {
    pub time_ms: f64,
    pub cursor: CursorSample,
    pub rotation: Quat,
    pub camera: &'a C,
    pub viewport: Viewport,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub interaction: InteractionReport,
    pub morph: f32,
}

pub struct SphereSimulation {
    field: ParticleField,
    resolver: PointerResolver,
    interaction: Interaction,
    morph: MorphControl,
}

impl SphereSimulation {
    pub fn new(config: SphereConfig) -> Result<Self, ConfigError> {
        Self::with_resolver(config, ResolverConfig::default())
    }

    pub fn with_resolver(config: SphereConfig, resolver: ResolverConfig) -> Result<Self, ConfigError> {
        let field = ParticleField::new(config)?;
        let interaction = Interaction::new(&field);
        Ok(Self {
            resolver: PointerResolver::new(field.radius(), resolver),
            interaction,
            field,
            morph: MorphControl::default(),
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn resolver(&self) -> &PointerResolver {
        &self.resolver
    }

    pub fn cursor_radius(&self) -> f32 {
        self.interaction.cursor_radius()
    }

    pub fn morph(&self) -> &MorphControl {
        &self.morph
    }

    pub fn set_morph_enabled(&mut self, enabled: bool) {
        self.morph.set_enabled(enabled);
    }

    pub fn toggle_morph(&mut self) {
        self.morph.toggle();
    }

    pub fn geometry(&self) -> RenderBuffers {
        self.field.geometry()
    }

    pub fn step<C: RayCaster + ?Sized>(
        &mut self,
        input: &FrameInput<'_, C>,
        buffers: &mut RenderBuffers,
    ) -> FrameReport {
        let path = self.cursor_path(input);
        let interaction = self.interaction.update(&mut self.field, input.rotation, path);
        let morph = self.morph.advance();
        morph::evaluate(&self.field, input.time_ms, morph, buffers);
        FrameReport { interaction, morph }
    }

    fn cursor_path<C: RayCaster + ?Sized>(&self, input: &FrameInput<'_, C>) -> Option<CursorPath> {
        let current_px = input.cursor.current?;
        let current = self.resolver.resolve(current_px, input.viewport, input.camera);
        let previous = match input.cursor.previous {
            Some(px) => self.resolver.resolve(px, input.viewport, input.camera),
            None => current,
        };
        Some(CursorPath {
            previous,
            current,
            speed: input.cursor.speed(),
        })
    }
}
