use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use trs_math::{
        Degrees, Matrix3, Matrix4, Quaternion, TrsTransform, UnitQuaternion, Vector3,
        rotation::{axis_angle_rotation_matrix, euler_rotation_matrix},
    };

    #[derive(Debug, Parser)]
    #[command(about = "Vectors, matrices and quaternion rotations", long_about = None)]
    struct Cli {
        /// Enable debug logging (overridden by `RUST_LOG`)
        #[arg(short, long, global = true)]
        verbose: bool,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Walk through the quaternion, matrix and vector operations
        Demo,
        /// Compose a transform and apply it to a point
        Transform {
            /// Translation as `x,y,z`
            #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
            translation: Option<Vec<f32>>,

            /// Euler angles in degrees as `bank,heading,attitude` (about x, y
            /// and z)
            #[arg(
                long,
                value_delimiter = ',',
                allow_hyphen_values = true,
                conflicts_with = "axis_angle"
            )]
            rotation: Option<Vec<f32>>,

            /// Rotation angle in degrees and axis as `angle,x,y,z`
            #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
            axis_angle: Option<Vec<f32>>,

            /// Scale factors as `x,y,z`
            #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
            scale: Option<Vec<f32>>,

            /// Point to transform as `x,y,z`
            #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
            point: Option<Vec<f32>>,
        },
        /// Invert a 3x3 matrix
        Invert {
            /// The nine matrix elements in row-major order
            #[arg(allow_hyphen_values = true, required = true)]
            elements: Vec<f32>,
        },
    }

    pub fn main() -> Result<()> {
        let cli = Cli::parse();

        let default_level = if cli.verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .init();

        match cli.command {
            Command::Demo => {
                demo();
                Ok(())
            }
            Command::Transform {
                translation,
                rotation,
                axis_angle,
                scale,
                point,
            } => transform(
                translation.as_deref(),
                rotation.as_deref(),
                axis_angle.as_deref(),
                scale.as_deref(),
                point.as_deref(),
            ),
            Command::Invert { elements } => invert(&elements),
        }
    }

    fn vector3(name: &str, values: &[f32]) -> Result<Vector3> {
        match values {
            &[x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => anyhow::bail!(
                "`--{name}` takes three comma-separated values, got {}",
                values.len()
            ),
        }
    }

    fn transform(
        translation: Option<&[f32]>,
        rotation: Option<&[f32]>,
        axis_angle: Option<&[f32]>,
        scale: Option<&[f32]>,
        point: Option<&[f32]>,
    ) -> Result<()> {
        let mut transform = TrsTransform::new();

        if let Some(values) = scale {
            transform.set_scale(&vector3("scale", values)?);
        }
        if let Some(values) = rotation {
            let angles = vector3("rotation", values)?;
            transform.set_rotation_euler(
                Degrees(angles.x()),
                Degrees(angles.y()),
                Degrees(angles.z()),
            );
        }
        if let Some(values) = axis_angle {
            let &[angle, x, y, z] = values else {
                anyhow::bail!(
                    "`--axis-angle` takes four comma-separated values, got {}",
                    values.len()
                );
            };
            let axis = Vector3::new(x, y, z);
            if axis.normalized_if_above(f32::EPSILON).is_none() {
                anyhow::bail!("The rotation axis must not be zero");
            }
            transform.set_rotation_axis_angle(Degrees(angle), &axis);
        }
        if let Some(values) = translation {
            transform.set_translation(&vector3("translation", values)?);
        }

        log::debug!("Transform state: {:?}", transform.state());

        println!("Transform matrix:\n{}", transform.matrix());

        if let Some(values) = point {
            let point = vector3("point", values)?;
            println!("Transformed point:\n{}", transform.transform_point(&point));
        }
        Ok(())
    }

    fn invert(elements: &[f32]) -> Result<()> {
        let matrix = Matrix3::try_from_slice(elements)
            .context("The matrix must be given as nine row-major elements")?;

        println!("Determinant: {}", matrix.determinant());
        println!("Cofactor:\n{}", matrix.cofactor());
        println!("Adjoint:\n{}", matrix.adjoint());

        let inverse = matrix
            .try_inverted()
            .context("The matrix could not be inverted")?;
        println!("Inverse:\n{inverse}");
        Ok(())
    }

    fn demo() {
        let a = Quaternion::new(1.0, 2.0, 3.0, 4.0);
        let b = Quaternion::new(8.0, 7.0, 6.0, 5.0);
        let c = Quaternion::new(9.0, 11.0, 13.0, 10.0);

        println!("Quaternions");
        println!(
            "a+b+c == c+b+a: {}\t{} = {}",
            a + b + c == c + b + a,
            a + b + c,
            c + b + a
        );
        println!("a*b == b*a: {}\t{} = {}", a * b == b * a, a * b, b * a);
        println!(
            "(a+b)*c == a*c+b*c: {}\t{} = {}",
            (a + b) * c == a * c + b * c,
            (a + b) * c,
            a * c + b * c
        );
        println!(
            "(a*b)*c == a*(b*c): {}\t{} = {}",
            (a * b) * c == a * (b * c),
            (a * b) * c,
            a * (b * c)
        );
        println!("a/b = {}", a / b);
        println!("inverse(a) = {}", a.inverse());
        println!("a*inverse(a) = {}", a * a.inverse());
        println!();

        let d = Matrix4::identity();
        let e = Matrix4::from_rows([
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0],
        ]);
        println!("4x4 matrices");
        println!("d + e =\n{}", d + e);
        println!("d - e =\n{}", d - e);
        println!("e * e =\n{}", e * e);

        let u = Vector3::new(1.0, 2.0, 3.0);
        let v = Vector3::new(1.0, 5.0, 7.0);
        println!("Vectors");
        println!("u + v =\n{}", u + v);
        println!("u - v =\n{}", u - v);
        println!("u . v = {}", u.dot(&v));
        println!("u x v =\n{}", u.cross(&v));

        println!("Rotation builders");
        println!(
            "Euler (90, 0, 0) =\n{}",
            euler_rotation_matrix(Degrees(90.0), Degrees(0.0), Degrees(0.0))
        );
        println!(
            "90 degrees about x =\n{}",
            axis_angle_rotation_matrix(Degrees(90.0), &Vector3::unit_x())
        );

        let point = Vector3::new(5.0, 0.0, 0.0);
        let about_y = axis_angle_rotation_matrix(Degrees(90.0), &Vector3::unit_y());
        let rotation = UnitQuaternion::from_axis_angle(Degrees(90.0), &Vector3::unit_y());
        println!("Rotating (5, 0, 0) by 90 degrees about y");
        println!("by matrix =\n{}", about_y * point);
        println!("by quaternion =\n{}", rotation.rotate_vector(&point));
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
