use super::helpers;

pub(crate) const SCENE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen targets for the scene pass.
///
/// The scene color persists across frames so the translucent fade layer
/// leaves motion trails; depth is cleared every frame.
pub(crate) struct RenderTargets {
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    // A fresh scene texture has undefined contents until cleared once.
    pub(crate) needs_clear: bool,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (scene_tex, scene_view) = create_scene(device, width, height);
        let (depth_tex, depth_view) = create_depth(device, width, height);
        Self {
            scene_tex,
            scene_view,
            depth_tex,
            depth_view,
            needs_clear: true,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.scene_tex, self.scene_view) = create_scene(device, width, height);
        (self.depth_tex, self.depth_view) = create_depth(device, width, height);
        self.needs_clear = true;
    }
}

fn create_scene(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_texture(
        device,
        "scene_tex",
        width,
        height,
        SCENE_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

fn create_depth(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_texture(
        device,
        "depth_tex",
        width,
        height,
        DEPTH_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT,
    )
}
