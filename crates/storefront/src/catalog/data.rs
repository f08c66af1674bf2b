//! Catalog reference data.

use super::{AccessoryCategory, ColorOption, Product, ProductType, SizeOption, Store};

/// Every product, bikes first, then accessories.
pub static PRODUCTS: &[Product] = &[
    Product {
        id: "touring-1000",
        name: "Touring-1000",
        price_cents: 219_900,
        kind: ProductType::Touring,
        category: None,
        image: "/images/touring-1000-main.jpg",
        images: &[
            "/images/touring-bike-1.jpg",
            "/images/touring-bike-2.jpg",
            "/images/touring-bike-3.jpg",
            "/images/touring-1000-main.jpg",
        ],
        description: "Diseñada para largas distancias, con cuadro de aluminio ligero y componentes de alta calidad. Perfecta para recorridos urbanos, turismo en carretera y desplazamientos diarios con estilo y resistencia.",
        technical_specs: &[
            "Cuadro: Aluminio 6061",
            "Cambios: Shimano 21 velocidades",
            "Frenos: Disco hidráulicos",
            "Ruedas: 700c con llantas anti-pinchazos",
            "Peso: 14.5 kg",
        ],
        colors: &[
            ColorOption {
                name: "Matte Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Gray",
                value: "gray",
                hex: "#6b7280",
            },
            ColorOption {
                name: "Yellow",
                value: "yellow",
                hex: "#fbbf24",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (15\")",
                value: "S",
            },
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
            SizeOption {
                label: "XL (21\")",
                value: "XL",
            },
        ],
    },
    Product {
        id: "road-750",
        name: "Road-750",
        price_cents: 159_900,
        kind: ProductType::Road,
        category: None,
        image: "/images/road-category.jpg",
        images: &["/images/road-category.jpg"],
        description: "Bicicleta de carretera de alto rendimiento con cuadro de carbono ultraligero. Ideal para ciclistas que buscan velocidad y eficiencia en asfalto.",
        technical_specs: &[
            "Cuadro: Fibra de carbono",
            "Cambios: Shimano 105, 22 velocidades",
            "Frenos: Caliper de doble pivote",
            "Ruedas: 700c aerodinámicas",
            "Peso: 8.2 kg",
        ],
        colors: &[
            ColorOption {
                name: "Racing Red",
                value: "red",
                hex: "#dc2626",
            },
            ColorOption {
                name: "Carbon Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "White",
                value: "white",
                hex: "#f3f4f6",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (50cm)",
                value: "S",
            },
            SizeOption {
                label: "M (54cm)",
                value: "M",
            },
            SizeOption {
                label: "L (58cm)",
                value: "L",
            },
        ],
    },
    Product {
        id: "mountain-500",
        name: "Mountain-500",
        price_cents: 189_900,
        kind: ProductType::Mountain,
        category: None,
        image: "/images/mountain-category.jpg",
        images: &["/images/mountain-category.jpg"],
        description: "Bicicleta de montaña robusta con suspensión completa. Perfecta para senderos técnicos y terrenos difíciles con máximo control y comodidad.",
        technical_specs: &[
            "Cuadro: Aluminio 7005 con suspensión trasera",
            "Suspensión delantera: RockShox 120mm",
            "Cambios: SRAM NX Eagle, 12 velocidades",
            "Frenos: Disco hidráulicos 180mm",
            "Ruedas: 29 pulgadas tubeless ready",
            "Peso: 13.8 kg",
        ],
        colors: &[
            ColorOption {
                name: "Forest Green",
                value: "green",
                hex: "#059669",
            },
            ColorOption {
                name: "Matte Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Orange",
                value: "orange",
                hex: "#f97316",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (15\")",
                value: "S",
            },
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
            SizeOption {
                label: "XL (21\")",
                value: "XL",
            },
        ],
    },
    Product {
        id: "ebike-2000",
        name: "E-Bike-2000",
        price_cents: 349_900,
        kind: ProductType::EBike,
        category: None,
        image: "/images/touring-bike-1.jpg",
        images: &["/images/touring-bike-1.jpg"],
        description: "Bicicleta eléctrica de última generación con motor potente y batería de larga duración. Perfecta para desplazamientos urbanos sin esfuerzo y aventuras de fin de semana.",
        technical_specs: &[
            "Motor: 250W Bosch Performance Line",
            "Batería: 500Wh, autonomía hasta 120km",
            "Cuadro: Aluminio reforzado",
            "Cambios: Shimano Deore, 10 velocidades",
            "Frenos: Disco hidráulicos 180mm",
            "Display: LCD con conectividad Bluetooth",
            "Peso: 22 kg",
        ],
        colors: &[
            ColorOption {
                name: "Midnight Blue",
                value: "blue",
                hex: "#1e40af",
            },
            ColorOption {
                name: "Silver",
                value: "silver",
                hex: "#9ca3af",
            },
        ],
        sizes: &[
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
        ],
    },
    Product {
        id: "road-350",
        name: "Road-350",
        price_cents: 89_900,
        kind: ProductType::Road,
        category: None,
        image: "/images/road-category.jpg",
        images: &["/images/road-category.jpg"],
        description: "Bicicleta de carretera de entrada ideal para principiantes. Ofrece un excelente equilibrio entre rendimiento y precio para iniciarse en el ciclismo de ruta.",
        technical_specs: &[
            "Cuadro: Aluminio 6061",
            "Cambios: Shimano Claris, 16 velocidades",
            "Frenos: Caliper de aleación",
            "Ruedas: 700c de doble pared",
            "Peso: 10.5 kg",
        ],
        colors: &[
            ColorOption {
                name: "Blue",
                value: "blue",
                hex: "#3b82f6",
            },
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (50cm)",
                value: "S",
            },
            SizeOption {
                label: "M (54cm)",
                value: "M",
            },
            SizeOption {
                label: "L (58cm)",
                value: "L",
            },
        ],
    },
    Product {
        id: "mountain-800",
        name: "Mountain-800",
        price_cents: 259_900,
        kind: ProductType::Mountain,
        category: None,
        image: "/images/mountain-category.jpg",
        images: &["/images/mountain-category.jpg"],
        description: "Bicicleta de montaña de gama alta con componentes premium. Diseñada para ciclistas exigentes que buscan el máximo rendimiento en descensos y subidas técnicas.",
        technical_specs: &[
            "Cuadro: Carbono con suspensión trasera 140mm",
            "Suspensión delantera: Fox Float 150mm",
            "Cambios: Shimano XT, 12 velocidades",
            "Frenos: Disco hidráulicos 203mm/180mm",
            "Ruedas: 27.5 pulgadas carbono tubeless",
            "Peso: 12.3 kg",
        ],
        colors: &[
            ColorOption {
                name: "Stealth Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Neon Yellow",
                value: "yellow",
                hex: "#facc15",
            },
            ColorOption {
                name: "Red",
                value: "red",
                hex: "#dc2626",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (15\")",
                value: "S",
            },
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
            SizeOption {
                label: "XL (21\")",
                value: "XL",
            },
        ],
    },
    Product {
        id: "touring-600",
        name: "Touring-600",
        price_cents: 139_900,
        kind: ProductType::Touring,
        category: None,
        image: "/images/touring-bike-2.jpg",
        images: &["/images/touring-bike-2.jpg"],
        description: "Bicicleta de turismo versátil y confiable. Perfecta para viajes largos con equipaje, con geometría cómoda y capacidad para portaequipajes.",
        technical_specs: &[
            "Cuadro: Acero cromoly",
            "Cambios: Shimano Deore, 27 velocidades",
            "Frenos: Disco mecánicos",
            "Ruedas: 700c reforzadas",
            "Soportes para portaequipajes y guardabarros",
            "Peso: 15.2 kg",
        ],
        colors: &[
            ColorOption {
                name: "Olive Green",
                value: "green",
                hex: "#84cc16",
            },
            ColorOption {
                name: "Brown",
                value: "brown",
                hex: "#92400e",
            },
            ColorOption {
                name: "Navy",
                value: "navy",
                hex: "#1e3a8a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "S (15\")",
                value: "S",
            },
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
        ],
    },
    Product {
        id: "ebike-1500",
        name: "E-Bike-1500",
        price_cents: 279_900,
        kind: ProductType::EBike,
        category: None,
        image: "/images/touring-bike-3.jpg",
        images: &["/images/touring-bike-3.jpg"],
        description: "Bicicleta eléctrica urbana con diseño elegante y funcional. Ideal para desplazamientos diarios con asistencia eléctrica suave y batería integrada.",
        technical_specs: &[
            "Motor: 250W motor central",
            "Batería: 400Wh integrada, autonomía 80km",
            "Cuadro: Aluminio con diseño step-through",
            "Cambios: Shimano Nexus, 7 velocidades internas",
            "Frenos: Disco hidráulicos",
            "Luces LED integradas",
            "Peso: 20 kg",
        ],
        colors: &[
            ColorOption {
                name: "Pearl White",
                value: "white",
                hex: "#f3f4f6",
            },
            ColorOption {
                name: "Graphite",
                value: "gray",
                hex: "#4b5563",
            },
        ],
        sizes: &[
            SizeOption {
                label: "M (17\")",
                value: "M",
            },
            SizeOption {
                label: "L (19\")",
                value: "L",
            },
        ],
    },
    Product {
        id: "tire-road-700c",
        name: "Llanta Road Pro 700c",
        price_cents: 4599,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Llantas),
        image: "/road-bike-tire-700c-black.jpg",
        images: &["/road-bike-tire-700c-black.jpg"],
        description: "Llanta de carretera de alto rendimiento con compuesto de goma optimizado para agarre y durabilidad. Diseño aerodinámico para máxima velocidad.",
        technical_specs: &[
            "Tamaño: 700c x 25mm",
            "Peso: 220g",
            "TPI: 120",
            "Presión: 95-125 PSI",
            "Compuesto: Dual compound",
            "Protección anti-pinchazos",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "700c x 23mm",
                value: "23",
            },
            SizeOption {
                label: "700c x 25mm",
                value: "25",
            },
            SizeOption {
                label: "700c x 28mm",
                value: "28",
            },
        ],
    },
    Product {
        id: "tire-mountain-29",
        name: "Llanta Mountain Grip 29",
        price_cents: 5299,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Llantas),
        image: "/mountain-bike-tire-29-inch-aggressive-tread.jpg",
        images: &["/mountain-bike-tire-29-inch-aggressive-tread.jpg"],
        description: "Llanta de montaña con diseño de tacos agresivos para máximo agarre en terrenos técnicos. Compatible con tubeless para mayor rendimiento.",
        technical_specs: &[
            "Tamaño: 29 x 2.35",
            "Peso: 780g",
            "TPI: 60",
            "Presión: 25-50 PSI",
            "Tubeless ready",
            "Compuesto: Triple compound",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "29\" x 2.25",
                value: "2.25",
            },
            SizeOption {
                label: "29\" x 2.35",
                value: "2.35",
            },
            SizeOption {
                label: "29\" x 2.50",
                value: "2.50",
            },
        ],
    },
    Product {
        id: "tire-touring-700c",
        name: "Llanta Touring Durable 700c",
        price_cents: 3899,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Llantas),
        image: "/touring-bike-tire-700c-puncture-resistant.jpg",
        images: &["/touring-bike-tire-700c-puncture-resistant.jpg"],
        description: "Llanta de turismo ultra resistente con capa anti-pinchazos reforzada. Ideal para viajes largos y uso diario con máxima durabilidad.",
        technical_specs: &[
            "Tamaño: 700c x 32mm",
            "Peso: 420g",
            "TPI: 67",
            "Presión: 50-85 PSI",
            "Protección anti-pinchazos de 5mm",
            "Banda reflectante",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "700c x 28mm",
                value: "28",
            },
            SizeOption {
                label: "700c x 32mm",
                value: "32",
            },
            SizeOption {
                label: "700c x 35mm",
                value: "35",
            },
        ],
    },
    Product {
        id: "chain-shimano-11sp",
        name: "Cadena Shimano 11 Velocidades",
        price_cents: 3499,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Cadenas),
        image: "/shimano-bike-chain-11-speed-silver.jpg",
        images: &["/shimano-bike-chain-11-speed-silver.jpg"],
        description: "Cadena de alta calidad Shimano para sistemas de 11 velocidades. Cambios suaves y precisos con tratamiento anti-corrosión.",
        technical_specs: &[
            "Velocidades: 11 speed",
            "Eslabones: 116",
            "Compatibilidad: Shimano/SRAM",
            "Tratamiento: Anti-corrosión",
            "Incluye eslabón rápido",
        ],
        colors: &[
            ColorOption {
                name: "Silver",
                value: "silver",
                hex: "#9ca3af",
            },
        ],
        sizes: &[
            SizeOption {
                label: "116 eslabones",
                value: "116",
            },
        ],
    },
    Product {
        id: "chain-sram-12sp",
        name: "Cadena SRAM Eagle 12 Velocidades",
        price_cents: 4999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Cadenas),
        image: "/sram-eagle-chain-12-speed-gold.jpg",
        images: &["/sram-eagle-chain-12-speed-gold.jpg"],
        description: "Cadena premium SRAM Eagle para sistemas de 12 velocidades. Diseño robusto para mountain bike con tecnología PowerLock.",
        technical_specs: &[
            "Velocidades: 12 speed Eagle",
            "Eslabones: 126",
            "Compatibilidad: SRAM Eagle",
            "Acabado: Hard Chrome",
            "PowerLock incluido",
        ],
        colors: &[
            ColorOption {
                name: "Silver",
                value: "silver",
                hex: "#9ca3af",
            },
            ColorOption {
                name: "Gold",
                value: "gold",
                hex: "#fbbf24",
            },
        ],
        sizes: &[
            SizeOption {
                label: "126 eslabones",
                value: "126",
            },
        ],
    },
    Product {
        id: "chain-kmc-10sp",
        name: "Cadena KMC 10 Velocidades",
        price_cents: 2499,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Cadenas),
        image: "/kmc-bike-chain-10-speed.jpg",
        images: &["/kmc-bike-chain-10-speed.jpg"],
        description: "Cadena versátil KMC para sistemas de 10 velocidades. Excelente relación calidad-precio con durabilidad comprobada.",
        technical_specs: &[
            "Velocidades: 10 speed",
            "Eslabones: 114",
            "Compatibilidad: Universal",
            "Tratamiento: Nickel plated",
            "Missing Link incluido",
        ],
        colors: &[
            ColorOption {
                name: "Silver",
                value: "silver",
                hex: "#9ca3af",
            },
        ],
        sizes: &[
            SizeOption {
                label: "114 eslabones",
                value: "114",
            },
        ],
    },
    Product {
        id: "pedals-clipless-road",
        name: "Pedales Clipless Road Pro",
        price_cents: 8999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Pedales),
        image: "/clipless-road-bike-pedals-black.jpg",
        images: &["/clipless-road-bike-pedals-black.jpg"],
        description: "Pedales clipless de carretera con plataforma amplia y ajuste de tensión. Rodamientos sellados para máxima eficiencia y durabilidad.",
        technical_specs: &[
            "Tipo: Clipless (Look Keo compatible)",
            "Peso: 260g (par)",
            "Material: Aluminio CNC",
            "Rodamientos: Sellados",
            "Ajuste de tensión: 3 posiciones",
            "Incluye calas",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "Universal",
                value: "universal",
            },
        ],
    },
    Product {
        id: "pedals-platform-mtb",
        name: "Pedales Platform MTB",
        price_cents: 6499,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Pedales),
        image: "/mountain-bike-platform-pedals-with-pins.jpg",
        images: &["/mountain-bike-platform-pedals-with-pins.jpg"],
        description: "Pedales de plataforma para mountain bike con pines reemplazables. Superficie amplia y agarre excepcional para descensos técnicos.",
        technical_specs: &[
            "Tipo: Platform",
            "Peso: 380g (par)",
            "Material: Aluminio forjado",
            "Pines: 10 por lado (reemplazables)",
            "Rodamientos: Sellados industriales",
            "Plataforma: 100mm x 95mm",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Red",
                value: "red",
                hex: "#dc2626",
            },
            ColorOption {
                name: "Blue",
                value: "blue",
                hex: "#3b82f6",
            },
        ],
        sizes: &[
            SizeOption {
                label: "Universal",
                value: "universal",
            },
        ],
    },
    Product {
        id: "saddle-road-performance",
        name: "Sillín Road Performance",
        price_cents: 7999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Sillines),
        image: "/road-bike-saddle-black-performance.jpg",
        images: &["/road-bike-saddle-black-performance.jpg"],
        description: "Sillín de carretera ergonómico con canal central para alivio de presión. Diseño ligero y aerodinámico para largas distancias.",
        technical_specs: &[
            "Peso: 195g",
            "Rieles: Carbono reforzado",
            "Relleno: Espuma de alta densidad",
            "Cubierta: Microfibra",
            "Canal central: Alivio de presión",
            "Dimensiones: 275mm x 143mm",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "White",
                value: "white",
                hex: "#f3f4f6",
            },
        ],
        sizes: &[
            SizeOption {
                label: "143mm",
                value: "143",
            },
            SizeOption {
                label: "155mm",
                value: "155",
            },
        ],
    },
    Product {
        id: "saddle-mtb-comfort",
        name: "Sillín MTB Comfort",
        price_cents: 6999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Sillines),
        image: "/mountain-bike-saddle-comfort-padding.jpg",
        images: &["/mountain-bike-saddle-comfort-padding.jpg"],
        description: "Sillín de mountain bike con acolchado extra y diseño robusto. Perfecto para trail riding y enduro con máxima comodidad.",
        technical_specs: &[
            "Peso: 285g",
            "Rieles: Acero cromoly",
            "Relleno: Gel + espuma",
            "Cubierta: Sintética resistente",
            "Protección lateral reforzada",
            "Dimensiones: 280mm x 155mm",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "155mm",
                value: "155",
            },
        ],
    },
    Product {
        id: "lights-front-1000lm",
        name: "Luz Delantera 1000 Lúmenes",
        price_cents: 5499,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Luces),
        image: "/bike-front-light-1000-lumens-usb-rechargeable.jpg",
        images: &["/bike-front-light-1000-lumens-usb-rechargeable.jpg"],
        description: "Luz delantera potente de 1000 lúmenes con batería recargable USB. Múltiples modos de iluminación para máxima visibilidad y seguridad.",
        technical_specs: &[
            "Potencia: 1000 lúmenes",
            "Batería: 2600mAh recargable USB-C",
            "Autonomía: 2-10 horas según modo",
            "Modos: Alto, Medio, Bajo, Flash, SOS",
            "Resistencia: IPX6 (resistente al agua)",
            "Montaje: Universal para manillar",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
        ],
        sizes: &[
            SizeOption {
                label: "Universal",
                value: "universal",
            },
        ],
    },
    Product {
        id: "lights-rear-usb",
        name: "Luz Trasera LED USB",
        price_cents: 2499,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Luces),
        image: "/bike-rear-light-led-usb-rechargeable-red.jpg",
        images: &["/bike-rear-light-led-usb-rechargeable-red.jpg"],
        description: "Luz trasera LED compacta y brillante con carga USB. Múltiples patrones de parpadeo para máxima visibilidad desde atrás.",
        technical_specs: &[
            "LEDs: 5 LEDs ultra brillantes",
            "Batería: 500mAh recargable USB",
            "Autonomía: 3-8 horas según modo",
            "Modos: Constante, Flash rápido, Flash lento",
            "Resistencia: IPX5",
            "Montaje: Tija de sillín o mochila",
        ],
        colors: &[
            ColorOption {
                name: "Red",
                value: "red",
                hex: "#dc2626",
            },
        ],
        sizes: &[
            SizeOption {
                label: "Universal",
                value: "universal",
            },
        ],
    },
    Product {
        id: "handlebar-road-carbon",
        name: "Manillar Road Carbono",
        price_cents: 12_999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Manillares),
        image: "/carbon-road-bike-handlebar-drop-bar.jpg",
        images: &["/carbon-road-bike-handlebar-drop-bar.jpg"],
        description: "Manillar de carretera en fibra de carbono ultraligero. Diseño ergonómico con drop compacto para máxima comodidad en largas distancias.",
        technical_specs: &[
            "Material: Fibra de carbono UD",
            "Peso: 210g",
            "Ancho: 40cm, 42cm, 44cm",
            "Drop: 125mm",
            "Reach: 80mm",
            "Diámetro de abrazadera: 31.8mm",
        ],
        colors: &[
            ColorOption {
                name: "Matte Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Gloss Black",
                value: "gloss-black",
                hex: "#000000",
            },
        ],
        sizes: &[
            SizeOption {
                label: "40cm",
                value: "40",
            },
            SizeOption {
                label: "42cm",
                value: "42",
            },
            SizeOption {
                label: "44cm",
                value: "44",
            },
        ],
    },
    Product {
        id: "handlebar-mtb-riser",
        name: "Manillar MTB Riser",
        price_cents: 4999,
        kind: ProductType::Accessories,
        category: Some(AccessoryCategory::Manillares),
        image: "/mountain-bike-riser-handlebar-aluminum.jpg",
        images: &["/mountain-bike-riser-handlebar-aluminum.jpg"],
        description: "Manillar riser de aluminio para mountain bike con geometría agresiva. Perfecto para trail y enduro con control superior.",
        technical_specs: &[
            "Material: Aluminio 7075-T6",
            "Peso: 320g",
            "Ancho: 760mm",
            "Rise: 20mm",
            "Backsweep: 9°",
            "Diámetro de abrazadera: 31.8mm",
        ],
        colors: &[
            ColorOption {
                name: "Black",
                value: "black",
                hex: "#1a1a1a",
            },
            ColorOption {
                name: "Red",
                value: "red",
                hex: "#dc2626",
            },
            ColorOption {
                name: "Blue",
                value: "blue",
                hex: "#3b82f6",
            },
        ],
        sizes: &[
            SizeOption {
                label: "760mm",
                value: "760",
            },
            SizeOption {
                label: "780mm",
                value: "780",
            },
        ],
    },
];

/// Physical store locations.
pub static STORES: &[Store] = &[
    Store {
        id: 1,
        name: "Adventure Works San Salvador",
        address: "Centro Comercial Multiplaza, Local 205, San Salvador",
        phone: "+503 2222-3333",
        email: "sansalvador@adventureworks.com",
        hours: &[
            "Lunes a Sábado: 9:00 AM - 8:00 PM",
            "Domingo: 10:00 AM - 6:00 PM",
        ],
        image: "/images/store-pickup.jpg",
        map_url: "https://maps.google.com/?q=Multiplaza+San+Salvador",
    },
    Store {
        id: 2,
        name: "Adventure Works Santa Ana",
        address: "Metrocentro Santa Ana, Nivel 2, Local 312, Santa Ana",
        phone: "+503 2440-5566",
        email: "santaana@adventureworks.com",
        hours: &[
            "Lunes a Sábado: 9:00 AM - 8:00 PM",
            "Domingo: 10:00 AM - 6:00 PM",
        ],
        image: "/images/mountain-category.jpg",
        map_url: "https://maps.google.com/?q=Metrocentro+Santa+Ana",
    },
    Store {
        id: 3,
        name: "Adventure Works La Libertad",
        address: "Boulevard Costa del Sol, Km 45, La Libertad",
        phone: "+503 2335-7788",
        email: "lalibertad@adventureworks.com",
        hours: &["Lunes a Domingo: 8:00 AM - 7:00 PM"],
        image: "/images/road-category.jpg",
        map_url: "https://maps.google.com/?q=La+Libertad+El+Salvador",
    },
];
