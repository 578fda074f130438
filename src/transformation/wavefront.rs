use crate::clip::ClipResult;
use crate::shape::TriMesh;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl TriMesh {
    /// Converts this mesh into Wavefront data with a single object named `name`.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_data(&self, name: &str) -> ObjData {
        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: name.to_string(),
                    index: 0,
                    material: None,
                }],
                name: name.to_string(),
            }],
            ..Default::default()
        }
    }

    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        self.to_obj_data("").write_to_buf(&mut file)
    }
}

impl ClipResult {
    /// Outputs all the fills of this result, merged into a single mesh, as a Wavefront (`.obj`)
    /// file at the given path.
    ///
    /// Returns `Ok(false)` without creating any file if this result has no fill.
    /// This function is enabled by the `wavefront` feature flag.
    pub fn fills_to_obj_file(&self, path: impl AsRef<Path>) -> Result<bool, ObjError> {
        match self.merged_fills() {
            Some(mesh) => {
                let mut file = std::fs::File::create(path)?;
                mesh.to_obj_data("clip").write_to_buf(&mut file)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
