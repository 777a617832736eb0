use ultraviolet::{projection, Mat4, Vec3};

#[derive(Debug)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub settings: CameraSettings,
}

#[derive(Debug)]
pub struct CameraSettings {
    pub z_near: f32,
    pub z_far: f32,
    pub fov_degrees: f32,
    pub aspect_ratio: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            z_near: 0.1,
            z_far: 512.0,
            fov_degrees: 60.0,
            aspect_ratio: 1.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32, settings: CameraSettings) -> Self {
        Self {
            position,
            yaw,
            pitch,
            settings,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(
            self.position,
            self.position + self.forward(),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        projection::rh_yup::perspective_vk(
            self.settings.fov_degrees.to_radians(),
            self.settings.aspect_ratio,
            self.settings.z_near,
            self.settings.z_far,
        )
    }
}
