//! Built-in content of the entrepreneur's manual.
//!
//! Four reading modules, thirteen sections. Section ids are stable; the
//! reading-progress store references them.

use indoc::indoc;

/// One readable section.
#[derive(Debug, Clone, Copy)]
pub struct ManualSection {
    pub id: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

/// A group of sections under one theme.
#[derive(Debug, Clone, Copy)]
pub struct ManualModule {
    pub id: &'static str,
    pub title: &'static str,
    pub sections: &'static [ManualSection],
}

/// The full manual catalog.
pub fn modules() -> &'static [ManualModule] {
    MODULES
}

/// Total number of readable sections across all modules.
pub fn total_sections() -> usize {
    MODULES.iter().map(|m| m.sections.len()).sum()
}

/// Find a section by id.
pub fn find_section(id: &str) -> Option<&'static ManualSection> {
    MODULES
        .iter()
        .flat_map(|m| m.sections.iter())
        .find(|s| s.id == id)
}

static MODULES: &[ManualModule] = &[
    ManualModule {
        id: "m1",
        title: "Módulo 1: Formaliza tu Idea",
        sections: &[
            ManualSection {
                id: "m1s1",
                title: "1. Mitos vs. Realidad de la Formalización",
                body: indoc! {"
                    Dar el paso de la idea a un negocio formal es la decisión más
                    importante para un microempresario. Te protege, te da seriedad y te
                    abre las puertas a un ecosistema de crecimiento.

                    MITO: 'Voy a pagar muchísimos impuestos y no me va a quedar nada.'
                    REALIDAD: los regímenes tributarios para Pymes están diseñados para
                    que pagues impuestos sobre tus ganancias reales, no sobre tus ventas
                    totales. Si un mes no tienes ganancias, no pagas impuesto a la renta.

                    MITO: 'Es un trámite muy caro y complicado, necesito un abogado.'
                    REALIDAD: gracias a la plataforma 'Tu Empresa en un Día', constituir
                    una empresa hoy es gratis y el proceso está diseñado para que
                    cualquier persona pueda hacerlo.
                "},
            },
            ManualSection {
                id: "m1s2",
                title: "2. Tu Primera Gran Decisión: El Vehículo Legal",
                body: indoc! {"
                    ¿Cómo te presentarás al mundo? Esta elección define cómo te proteges.

                    Opción A: Persona Natural con Giro. Ideal para probar una idea con
                    mínima burocracia, pero no hay separación entre tu patrimonio
                    personal y el del negocio.

                    Opción B: E.I.R.L. Para quienes emprenden solos; tu patrimonio
                    personal queda protegido, pero no puedes sumar socios.

                    Opción C (recomendada): Sociedad por Acciones (SpA). Protege tu
                    patrimonio igual que una EIRL y te da flexibilidad para sumar socios
                    vendiendo acciones. Es la opción más estratégica a largo plazo.
                "},
            },
            ManualSection {
                id: "m1s3",
                title: "3. El Proceso Paso a Paso (Sin Perderse)",
                body: indoc! {"
                    1. Constituir la empresa en el portal 'Tu Empresa en un Día' con tu
                       Clave Única. En 'Objeto Social', sé amplio.
                    2. Obtener el RUT e iniciar actividades en sii.cl con el RUT de la
                       empresa recién creada.
                    3. Elegir régimen tributario; para microempresarios la opción más
                       común es el Régimen Pro Pyme Transparente.
                    4. Verificar actividad y domicilio; necesario para emitir facturas.
                    5. Obtener la patente municipal en tu comuna: tu permiso para
                       funcionar, pagado semestralmente.
                "},
            },
            ManualSection {
                id: "m1s4",
                title: "4. Ejemplo Práctico Real",
                body: indoc! {"
                    María vende mermeladas artesanales. Constituyó una SpA gratis en el
                    portal, inició actividades el mismo día y eligió el régimen Pro Pyme
                    Transparente. Con su patente municipal al día pudo entrar a vender a
                    dos tiendas de barrio que le exigían factura, duplicando sus puntos
                    de venta en un mes.
                "},
            },
        ],
    },
    ManualModule {
        id: "m2",
        title: "Módulo 2: Gestiona tu Negocio",
        sections: &[
            ManualSection {
                id: "m2s1",
                title: "1. Finanzas Clave: Más Allá de Sumar y Restar",
                body: indoc! {"
                    Separa siempre el dinero del negocio del dinero personal, y asígnate
                    un sueldo fijo. Conoce tus tres números vitales: costos fijos,
                    costos variables y margen de contribución. Con ellos sabrás cuántas
                    unidades necesitas vender para no perder dinero (tu punto de
                    equilibrio) y cuánto te deja realmente cada venta.
                "},
            },
            ManualSection {
                id: "m2s2",
                title: "2. El Arte de Poner Precios Rentables",
                body: indoc! {"
                    Un precio no se adivina: se calcula. Parte del costo variable por
                    unidad, suma la parte proporcional de tus costos fijos y define la
                    utilidad que quieres obtener. Compara con el mercado y pregúntate
                    qué valor extra entregas. Subir un precio bien justificado es más
                    sano que vender mucho perdiendo plata en cada unidad.
                "},
            },
            ManualSection {
                id: "m2s3",
                title: "3. Marketing Inteligente para Microempresas",
                body: indoc! {"
                    No necesitas un gran presupuesto: necesitas claridad. Define a quién
                    le vendes, qué problema le resuelves y por qué tú. Usa redes
                    sociales con constancia (mejor un canal bien atendido que cinco
                    abandonados), cuida las fotos de tu producto y pide a tus clientes
                    felices que te recomienden.
                "},
            },
        ],
    },
    ManualModule {
        id: "m3",
        title: "Módulo 3: Innovación y Sostenibilidad",
        sections: &[
            ManualSection {
                id: "m3s1",
                title: "1. Innovación Práctica: El Modelo Lean Startup",
                body: indoc! {"
                    Antes de invertir en una idea nueva, pruébala en pequeño: crea la
                    versión más simple posible de tu producto, muéstrasela a clientes
                    reales y mide su reacción. Aprende del resultado y ajusta. Repetir
                    este ciclo de crear-medir-aprender evita gastar meses y dinero en
                    algo que nadie quiere comprar.
                "},
            },
            ManualSection {
                id: "m3s2",
                title: "2. Sostenibilidad como Estrategia de Negocio",
                body: indoc! {"
                    Reducir mermas, reutilizar envases y comprar a proveedores locales
                    no es solo bueno para el planeta: baja tus costos y te diferencia.
                    Cada vez más clientes eligen negocios responsables; cuenta tu
                    práctica sostenible como parte de tu propuesta de valor.
                "},
            },
            ManualSection {
                id: "m3s3",
                title: "3. Kit de Herramientas Digitales Esenciales",
                body: indoc! {"
                    Digitaliza lo básico: un medio de pago electrónico, una planilla o
                    aplicación para registrar ventas y gastos, y una agenda de pedidos.
                    Quince minutos al día manteniendo tus registros al día valen más que
                    una semana de ordenar papeles a fin de mes.
                "},
            },
        ],
    },
    ManualModule {
        id: "m4",
        title: "Módulo 4: Liderazgo y Equipo",
        sections: &[
            ManualSection {
                id: "m4s1",
                title: "1. Autoliderazgo: El Activo más Importante",
                body: indoc! {"
                    Tu negocio crece hasta donde tú creces. Cuida tu energía: define
                    horarios, descansa y celebra los avances pequeños. Dedica un rato a
                    la semana a trabajar EN el negocio (planificar, revisar números) y
                    no solo PARA el negocio (producir y vender).
                "},
            },
            ManualSection {
                id: "m4s2",
                title: "2. Construyendo tu Primer Equipo (Incluso de a dos)",
                body: indoc! {"
                    El primer ayudante se elige por confianza y actitud; las habilidades
                    se enseñan. Acuerda por escrito tareas, horarios y pago, aunque sea
                    familia. Delegar bien empieza por explicar el resultado esperado y
                    dejar que la otra persona encuentre su manera de lograrlo.
                "},
            },
            ManualSection {
                id: "m4s3",
                title: "3. El Poder Estratégico de las Redes",
                body: indoc! {"
                    Nadie emprende solo. Participa en ferias, agrupaciones de barrio y
                    comunidades de emprendedores: ahí aparecen proveedores más baratos,
                    clientes nuevos y socios posibles. Compartir lo que sabes te
                    posiciona y siempre vuelve multiplicado.
                "},
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_has_thirteen_sections_in_four_modules() {
        assert_eq!(modules().len(), 4);
        assert_eq!(total_sections(), 13);
    }

    #[test]
    fn section_ids_are_unique() {
        let ids: BTreeSet<&str> = modules()
            .iter()
            .flat_map(|m| m.sections.iter().map(|s| s.id))
            .collect();
        assert_eq!(ids.len(), total_sections());
    }

    #[test]
    fn find_section_by_id() {
        assert!(find_section("m1s1").unwrap().title.contains("Mitos"));
        assert!(find_section("m9s9").is_none());
    }
}
